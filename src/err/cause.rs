use crate::err::error::ToolError;
use std::error::Error;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub enum Cause {
    Tool(ToolError),
    Std(Arc<dyn Error + Send + Sync>),
}
