/// A stored domain record with a unique opaque identifier.
///
/// Implemented by every entity the record store holds; `KIND` names the
/// resource in logs and conflict messages.
pub trait Resource: Clone + Send + Sync + 'static {
    /// Resource name used in logs and error messages.
    const KIND: &'static str;

    /// The entity's unique identifier.
    fn id(&self) -> &str;
}
