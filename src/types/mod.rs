//! Shared response envelopes.

mod response;

pub use response::{
    Created, DataResponse, MessageResponse, UserListResponse, WorkEntryListResponse,
};
