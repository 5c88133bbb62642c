pub mod chat_history;
pub mod recommendation;
pub mod turn;
