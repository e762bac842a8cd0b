/// A fact worth telling other parts of the page about.
///
/// `event_type` is a dotted name (`site.cart.updated`) used in logs; it stays
/// stable when payload fields change, `version` does not.
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    fn event_type(&self) -> &'static str;

    fn version(&self) -> u32 {
        1
    }
}
