mod bank;
mod ids;
mod question;
mod schema;
mod settings;
mod summary;

pub use bank::{BankError, QuestionBank};
pub use ids::{QuestionId, SchemaKey};
pub use question::{BadgeTone, Difficulty, Question};
pub use schema::{SchemaCatalog, SchemaEntry};
pub use settings::{DEFAULT_TIME_LIMIT_SECS, DEFAULT_URGENT_THRESHOLD_SECS, DrillSettings, SettingsError};
pub use summary::{DrillSummary, QuestionOutcome};
