/// This module contains the batch database model.
pub mod batch;
