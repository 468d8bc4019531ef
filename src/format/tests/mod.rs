mod matcher_tests;
mod region_tests;
mod metadata_tests;
mod units_tests;
mod registry_tests;
