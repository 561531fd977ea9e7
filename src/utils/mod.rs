mod unique;

pub use unique::unique_values;
