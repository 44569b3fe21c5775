pub mod conflicts;
pub mod deploy;
pub mod poller;

pub use crate::domain::model::{
    Completion, DeploymentReport, DeploymentRequest, DeploymentStatus, RemoteState,
    StatusReport, SubmissionHandle,
};
pub use crate::domain::ports::{SchemaService, Storage};
pub use crate::utils::error::Result;
