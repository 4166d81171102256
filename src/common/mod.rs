pub mod hash;

pub trait KeyType: Eq + Clone {}
impl<T: Eq + Clone> KeyType for T {}

pub const DEFAULT_CAPACITY: usize = 100000;
