//! Property test harness.

mod property {
    mod storage_properties;
}
