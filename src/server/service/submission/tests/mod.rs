use maxranked_test_utils::prelude::*;

use crate::{
    model::submission::{AssetSubmissionDto, CompanySubmissionDto, ParentSubmissionDto},
    server::{
        error::{submission::SubmissionError, Error},
        service::submission::SubmissionService,
    },
};
