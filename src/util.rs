/// Numeric conversion helpers.
///
/// Lossless conversions between integer and floating-point types, and sign
/// handling for unsigned magnitudes. Every conversion either succeeds exactly
/// or reports failure; nothing is silently rounded or wrapped.
pub mod num;
