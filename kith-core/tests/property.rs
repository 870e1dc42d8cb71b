//! Property test harness.

mod property {
    mod model_properties;
}
