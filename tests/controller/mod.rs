//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with extracted request data, verifying status codes and
//! JSON bodies for successful requests and error mappings.

mod company;
mod submission;
mod vote;

use maxranked_test_utils::prelude::*;

use crate::{
    util::{into_response, read_json},
    TestContextExt,
};
