mod statement_id;

pub use statement_id::StatementId;
