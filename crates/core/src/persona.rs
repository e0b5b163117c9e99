//! Fixed texts of the assistant persona: the system directive, the
//! greeting, the suggested prompts, and the notices substituted for
//! degraded turns.

/// The behavioral directive sent with every completion request:
/// persona, domain scope, tone rules, and the mandatory disclaimer
/// policy.
pub const SYSTEM_DIRECTIVE: &str = include_str!("directive.md");

/// Default sampling temperature for the completion service.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Greeting shown before the first user turn.
pub const WELCOME: &str = "**Bonjour.**\n\nJe suis l'assistant virtuel d'Actalon. Je peux répondre à vos questions générales sur :\n* Le droit de la famille (mariage, succession...)\n* Le droit immobilier\n* La gestion de patrimoine\n\nComment puis-je vous aider aujourd'hui ?";

/// Notice appended in place of a reply when the completion service
/// fails.
pub const FAILURE_NOTICE: &str = "Désolé, une erreur technique est survenue. Veuillez réessayer plus tard ou contacter directement l'étude.";

/// Notice appended when the service answers without any usable text.
pub const EMPTY_REPLY_NOTICE: &str = "Je suis désolé, je n'ai pas pu générer de réponse pour le moment. Veuillez réessayer.";

/// Example prompts offered as quick-submit actions.
pub const SUGGESTED_PROMPTS: &[&str] = &[
    "Quelles sont les étapes d'une succession ?",
    "Vente immobilière : quels documents préparer ?",
    "Quels sont les avantages du contrat de mariage ?",
    "Comment transmettre mon patrimoine de mon vivant ?",
];
