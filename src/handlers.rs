use axum::Json;

use crate::dtos::Message;

/// Greeting text returned by the hello endpoint.
pub const GREETING: &str = "Hello Sir/Madam, welcome to UST!";

/// Returns the welcome greeting.
///
/// The response carries the greeting text along with the date and time at
/// which the request was served.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Successful greeting", body = Message)
    )
)]
pub async fn hello() -> Json<Message> {
    Json(Message::new(GREETING))
}
