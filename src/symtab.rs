/// Number of buckets in a freshly created table. Always a power of two.
const INITIAL_CAPACITY: usize = 8;

/// FNV-1a 64-bit offset basis.
const FNV_OFFSET_BASIS: u64 = 14_695_981_039_346_656_037;
/// FNV-1a 64-bit prime.
const FNV_PRIME: u64 = 1_099_511_628_211;

/// One key/value pair in a bucket chain.
struct Entry<V> {
    key:   String,
    value: V,
    next:  Option<Box<Entry<V>>>,
}

/// A hash table mapping names to values, used for both turtle variables and
/// procedure bodies.
///
/// Collisions are resolved by separate chaining; keys are placed with the
/// FNV-1a hash reduced modulo the bucket count. The bucket count starts at 8,
/// is always a power of two, and doubles (rehashing every entry) whenever a
/// fresh insert would reach three-quarters occupancy. Capacity never shrinks.
///
/// The table owns a copy of each key; values are whatever the caller stores
/// (the interpreter stores `f64` for variables and tree handles for
/// procedures).
///
/// # Example
/// ```
/// use tortue::symtab::SymbolTable;
///
/// let mut table = SymbolTable::new();
///
/// // A fresh key reports `true`; overwriting reports `false`.
/// assert!(table.set("side", 40.0));
/// assert!(!table.set("side", 25.0));
///
/// assert_eq!(table.get("side"), Some(&25.0));
/// assert_eq!(table.get("angle"), None);
/// ```
pub struct SymbolTable<V> {
    buckets: Vec<Option<Box<Entry<V>>>>,
    count:   usize,
}

impl<V> SymbolTable<V> {
    /// Creates an empty table with the initial bucket count.
    #[must_use]
    pub fn new() -> Self {
        let mut buckets = Vec::new();
        buckets.resize_with(INITIAL_CAPACITY, || None);
        Self { buckets, count: 0 }
    }

    /// Returns the number of entries currently stored.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.count
    }

    /// Returns `true` if the table holds no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the current bucket count.
    ///
    /// Exposed so callers (and tests) can observe growth; the value is always
    /// a power of two and never decreases.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Inserts or overwrites the value stored under `key`.
    ///
    /// Returns `true` when the key was newly inserted and `false` when an
    /// existing entry was updated. Updates only replace the value; the stored
    /// key is left untouched and the table never grows for them. A fresh
    /// insert first grows the table if it would reach the load threshold.
    ///
    /// # Example
    /// ```
    /// use tortue::symtab::SymbolTable;
    ///
    /// let mut table = SymbolTable::new();
    /// for (i, name) in ["a", "b", "c", "d", "e", "f", "g", "h", "i"].iter().enumerate() {
    ///     table.set(name, i);
    /// }
    ///
    /// // Nine entries forced one doubling past the initial eight buckets.
    /// assert_eq!(table.len(), 9);
    /// assert_eq!(table.capacity(), 16);
    /// assert_eq!(table.get("e"), Some(&4));
    /// ```
    pub fn set(&mut self, key: &str, value: V) -> bool {
        let index = self.bucket_index(key);
        if let Some(existing) = Self::find_chain_mut(&mut self.buckets[index], key) {
            *existing = value;
            return false;
        }

        if (self.count + 1) * 4 >= self.capacity() * 3 {
            self.grow();
        }

        let index = self.bucket_index(key);
        let head = self.buckets[index].take();
        self.buckets[index] = Some(Box::new(Entry { key: key.to_owned(),
                                                    value,
                                                    next: head, }));
        self.count += 1;
        true
    }

    /// Looks up `key` and returns a reference to its value, or `None` when
    /// the key is absent.
    pub fn get(&self, key: &str) -> Option<&V> {
        let mut entry = self.buckets[self.bucket_index(key)].as_deref();
        while let Some(e) = entry {
            if e.key == key {
                return Some(&e.value);
            }
            entry = e.next.as_deref();
        }
        None
    }

    /// Walks one bucket chain looking for `key`, returning its value slot.
    fn find_chain_mut<'c>(chain: &'c mut Option<Box<Entry<V>>>, key: &str) -> Option<&'c mut V> {
        let mut entry = chain.as_deref_mut();
        while let Some(e) = entry {
            if e.key == key {
                return Some(&mut e.value);
            }
            entry = e.next.as_deref_mut();
        }
        None
    }

    /// Doubles the bucket count and rehashes every entry into its new chain.
    ///
    /// Entries are moved, never cloned, so growth cannot duplicate or drop a
    /// key. Order within a chain is not preserved.
    fn grow(&mut self) {
        let doubled = self.capacity() * 2;
        let mut fresh = Vec::new();
        fresh.resize_with(doubled, || None);
        let old = std::mem::replace(&mut self.buckets, fresh);

        for slot in old {
            let mut entry = slot;
            while let Some(mut e) = entry {
                entry = e.next.take();
                let index = Self::slot_for(&e.key, doubled);
                e.next = self.buckets[index].take();
                self.buckets[index] = Some(e);
            }
        }
    }

    fn bucket_index(&self, key: &str) -> usize {
        Self::slot_for(key, self.capacity())
    }

    #[allow(clippy::cast_possible_truncation)]
    fn slot_for(key: &str, capacity: usize) -> usize {
        (fnv1a(key) % capacity as u64) as usize
    }
}

impl<V> Default for SymbolTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Hashes a key with 64-bit FNV-1a over its bytes.
fn fnv1a(key: &str) -> u64 {
    let mut hash = FNV_OFFSET_BASIS;
    for byte in key.bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}
