use maxranked_test_utils::prelude::*;

use crate::server::service::hierarchy::HierarchyAggregator;
