use gloo_net::http::Request;
use shared::{LoginRequest, LoginResponse};

/// POST the credentials to the auth endpoint.
///
/// Transport errors, non-2xx statuses, and unparseable bodies all come
/// back as `Err`; the caller treats them uniformly as one failed attempt.
pub async fn login(request: &LoginRequest) -> Result<LoginResponse, gloo_net::Error> {
    let resp = Request::post("/user/login").json(request)?.send().await?;
    if resp.ok() {
        resp.json::<LoginResponse>().await
    } else {
        Err(gloo_net::Error::GlooError(format!(
            "login rejected with status {}",
            resp.status()
        )))
    }
}
