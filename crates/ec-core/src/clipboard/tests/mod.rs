mod snapshot_tests;
mod upload_tests;
