/// Marker for the zero-sized states a typestate builder moves through.
///
/// A builder carries its states as `PhantomData` parameters and only exposes
/// `build` once every required state has been reached, so a missing field is a
/// compile error instead of a runtime panic.
pub trait BuilderTypeState {}
