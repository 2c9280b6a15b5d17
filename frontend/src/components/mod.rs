mod password_input;

pub use password_input::PasswordInput;
