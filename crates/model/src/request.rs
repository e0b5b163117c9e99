/// A request to be sent to the completion service.
///
/// The service is stateless from the caller's point of view: each
/// request carries the full behavioral directive along with the single
/// user utterance to answer.
#[derive(Clone, Debug, PartialEq)]
pub struct CompletionRequest {
    /// The fixed system directive (persona, domain scope, tone rules,
    /// disclaimer policy).
    pub directive: String,
    /// The user's natural-language input.
    pub message: String,
    /// Optional sampling temperature. `None` leaves the choice to the
    /// service.
    pub temperature: Option<f32>,
}
