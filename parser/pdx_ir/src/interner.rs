//! Pinned-storage string interner.
//!
//! Interned bytes live in page-backed storage that never moves once
//! allocated, so a [`Symbol`] stays valid for the interner's whole life.
//! Lookup goes through a linear-probed open-addressing table keyed by a
//! 64-bit FNV-1a hash; the table grows, the pages do not.
//!
//! Exhaustion is not an error type: when the storage cap is reached,
//! `intern` hands back [`Symbol::INVALID`] and the caller decides what to
//! do about it.

use std::fmt;

/// Granularity of page allocation. A single string longer than this gets
/// its own oversized page.
const PAGE_SIZE: usize = 16 * 1024;

/// Hard cap on page count; storage is exhausted past this.
const MAX_PAGES: usize = 4096;

/// Minimum slot count for the probe table.
const MIN_TABLE_SIZE: usize = 1024;

/// Slot value for an unoccupied table entry.
const UNOCCUPIED: u32 = u32::MAX;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Handle to a byte sequence stored exactly once in a [`SymbolInterner`].
///
/// Two symbols from the same interner are equal iff their bytes are equal.
/// Ordering is by storage offset: stable within one interner, meaningless
/// across interners.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Symbol(u32);

crate::static_assert_size!(Symbol, 4);

impl Symbol {
    /// The invalid symbol returned when the interner is exhausted.
    pub const INVALID: Symbol = Symbol(u32::MAX);

    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.0 != u32::MAX
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "Symbol({})", self.0)
        } else {
            write!(f, "Symbol(<invalid>)")
        }
    }
}

/// A pinned storage page. The boxed slice is allocated once at a fixed
/// capacity and only `used` advances; bytes never move afterwards.
struct Page {
    /// Global offset of this page's first byte.
    start: u32,
    data: Box<[u8]>,
    used: usize,
}

impl Page {
    fn new(start: u32, capacity: usize) -> Self {
        Page {
            start,
            data: vec![0u8; capacity].into_boxed_slice(),
            used: 0,
        }
    }

    fn remaining(&self) -> usize {
        self.data.len() - self.used
    }
}

/// Append-only interner with pinned byte storage.
pub struct SymbolInterner {
    pages: Vec<Page>,
    /// Total bytes written across all pages.
    total_used: u32,
    /// Probe table of storage offsets; `UNOCCUPIED` marks a free slot.
    slots: Box<[u32]>,
    occupied: usize,
}

impl SymbolInterner {
    pub fn new() -> Self {
        SymbolInterner {
            pages: Vec::new(),
            total_used: 0,
            slots: vec![UNOCCUPIED; MIN_TABLE_SIZE].into_boxed_slice(),
            occupied: 0,
        }
    }

    /// Ensure the storage admits `additional_bytes` more content without
    /// exceeding the storage cap. Returns `false` on exhaustion, before
    /// any allocation happens.
    pub fn reserve(&mut self, additional_bytes: usize) -> bool {
        let available: usize = self.pages.last().map_or(0, Page::remaining);
        if available >= additional_bytes {
            return true;
        }
        let deficit = additional_bytes - available;
        if self.pages.len() >= MAX_PAGES || deficit > MAX_PAGES * PAGE_SIZE {
            return false;
        }
        let size = PAGE_SIZE.max(deficit);
        self.pages.push(Page::new(self.total_allocated(), size));
        true
    }

    /// Intern a string, returning its symbol.
    ///
    /// Repeat interning of equal content returns the same symbol. On
    /// storage exhaustion the result is [`Symbol::INVALID`]; previously
    /// interned symbols stay valid.
    pub fn intern(&mut self, s: &str) -> Symbol {
        self.intern_bytes(s.as_bytes())
    }

    /// Intern raw bytes. The stored copy gains a trailing null byte, so
    /// the input must not contain one.
    pub fn intern_bytes(&mut self, bytes: &[u8]) -> Symbol {
        debug_assert!(
            !bytes.contains(&0),
            "interned content must not contain null bytes"
        );

        let hash = fnv1a(bytes);
        let mask = self.slots.len() - 1;
        let mut idx = (hash as usize) & mask;
        loop {
            let entry = self.slots[idx];
            if entry == UNOCCUPIED {
                break;
            }
            if self.entry_matches(entry, bytes) {
                return Symbol(entry);
            }
            idx = (idx + 1) & mask;
        }

        let Some(offset) = self.append(bytes) else {
            return Symbol::INVALID;
        };
        self.slots[idx] = offset;
        self.occupied += 1;
        if self.occupied * 2 >= self.slots.len() {
            self.grow_table();
        }
        Symbol(offset)
    }

    /// Null-terminated backing bytes of a symbol (terminator included).
    ///
    /// # Panics
    /// Panics on [`Symbol::INVALID`].
    pub fn c_str(&self, symbol: Symbol) -> &[u8] {
        let bytes = self.content_bytes(symbol);
        // Extend by the terminator, which always follows the content.
        let page = self.page_of(symbol.0);
        let local = (symbol.0 - page.start) as usize;
        &page.data[local..local + bytes.len() + 1]
    }

    /// Interned content of a symbol, without the null terminator.
    pub fn view(&self, symbol: Symbol) -> &str {
        std::str::from_utf8(self.content_bytes(symbol)).unwrap_or_default()
    }

    /// Number of distinct strings interned so far.
    pub fn len(&self) -> usize {
        self.occupied
    }

    pub fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    fn content_bytes(&self, symbol: Symbol) -> &[u8] {
        assert!(symbol.is_valid(), "invalid symbol has no content");
        let page = self.page_of(symbol.0);
        let local = (symbol.0 - page.start) as usize;
        let tail = &page.data[local..page.used.max(local)];
        let len = memchr::memchr(0, tail).unwrap_or(tail.len());
        &tail[..len]
    }

    fn page_of(&self, offset: u32) -> &Page {
        let idx = self
            .pages
            .partition_point(|p| p.start <= offset)
            .saturating_sub(1);
        &self.pages[idx]
    }

    fn total_allocated(&self) -> u32 {
        self.pages
            .last()
            .map_or(0, |p| p.start + p.data.len() as u32)
    }

    /// Append `bytes` plus a null terminator into pinned storage.
    fn append(&mut self, bytes: &[u8]) -> Option<u32> {
        let needed = bytes.len() + 1;
        if self.pages.last().is_none_or(|p| p.remaining() < needed) {
            if self.pages.len() >= MAX_PAGES || needed > MAX_PAGES * PAGE_SIZE {
                return None;
            }
            let start = self.total_allocated();
            self.pages.push(Page::new(start, PAGE_SIZE.max(needed)));
        }
        let page = self.pages.last_mut()?;
        let offset = page.start + page.used as u32;
        page.data[page.used..page.used + bytes.len()].copy_from_slice(bytes);
        page.data[page.used + bytes.len()] = 0;
        page.used += needed;
        self.total_used += needed as u32;
        Some(offset)
    }

    fn entry_matches(&self, entry: u32, bytes: &[u8]) -> bool {
        self.content_bytes(Symbol(entry)) == bytes
    }

    /// Double the probe table. Only offsets are rehashed; the pinned
    /// storage is untouched.
    fn grow_table(&mut self) {
        let new_size = self.slots.len() * 2;
        let mut new_slots = vec![UNOCCUPIED; new_size].into_boxed_slice();
        let mask = new_size - 1;
        for &entry in self.slots.iter().filter(|&&e| e != UNOCCUPIED) {
            let hash = fnv1a(self.content_bytes(Symbol(entry)));
            let mut idx = (hash as usize) & mask;
            while new_slots[idx] != UNOCCUPIED {
                idx = (idx + 1) & mask;
            }
            new_slots[idx] = entry;
        }
        self.slots = new_slots;
    }
}

impl Default for SymbolInterner {
    fn default() -> Self {
        SymbolInterner::new()
    }
}

impl fmt::Debug for SymbolInterner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SymbolInterner")
            .field("symbols", &self.occupied)
            .field("bytes", &self.total_used)
            .finish()
    }
}

#[inline]
fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hash = FNV_OFFSET_BASIS;
    for &b in bytes {
        hash ^= u64::from(b);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn intern_and_view() {
        let mut interner = SymbolInterner::new();
        let hello = interner.intern("hello");
        let world = interner.intern("world");

        assert_ne!(hello, world);
        assert_eq!(interner.view(hello), "hello");
        assert_eq!(interner.view(world), "world");
    }

    #[test]
    fn intern_is_idempotent() {
        let mut interner = SymbolInterner::new();
        let a = interner.intern("value");
        let b = interner.intern("value");
        assert_eq!(a, b);
        assert_eq!(interner.len(), 1);
    }

    #[test]
    fn empty_string() {
        let mut interner = SymbolInterner::new();
        let empty = interner.intern("");
        assert!(empty.is_valid());
        assert_eq!(interner.view(empty), "");
        assert_eq!(interner.c_str(empty), &[0]);
    }

    #[test]
    fn c_str_is_null_terminated() {
        let mut interner = SymbolInterner::new();
        let sym = interner.intern("abc");
        assert_eq!(interner.c_str(sym), b"abc\0");
    }

    #[test]
    fn invalid_symbol_is_distinguishable() {
        let mut interner = SymbolInterner::new();
        let sym = interner.intern("x");
        assert!(sym.is_valid());
        assert!(!Symbol::INVALID.is_valid());
        assert_ne!(sym, Symbol::INVALID);
    }

    #[test]
    fn reserve_reports_capacity() {
        let mut interner = SymbolInterner::new();
        assert!(interner.reserve(1024));
        // Far past the page cap.
        assert!(!interner.reserve(usize::MAX / 2));
    }

    #[test]
    fn symbols_survive_table_growth() {
        let mut interner = SymbolInterner::new();
        let mut symbols = Vec::new();
        for i in 0..2_000 {
            symbols.push((i, interner.intern(&format!("symbol_{i}"))));
        }
        for (i, sym) in symbols {
            assert_eq!(interner.view(sym), format!("symbol_{i}"));
        }
    }

    #[test]
    fn long_string_gets_oversized_page() {
        let mut interner = SymbolInterner::new();
        let long = "x".repeat(PAGE_SIZE * 2);
        let sym = interner.intern(&long);
        assert_eq!(interner.view(sym), long);
        // Storage after the oversized page still works.
        let after = interner.intern("after");
        assert_eq!(interner.view(after), "after");
    }

    #[test]
    fn ordering_is_stable() {
        let mut interner = SymbolInterner::new();
        let first = interner.intern("first");
        let second = interner.intern("second");
        assert!(first < second);
        // Re-interning does not change the ordering.
        assert_eq!(interner.intern("first"), first);
        assert!(interner.intern("first") < interner.intern("second"));
    }

    proptest! {
        #[test]
        fn intern_roundtrip(s in "[a-zA-Z0-9_+:@%&'.-]{0,64}") {
            let mut interner = SymbolInterner::new();
            let sym = interner.intern(&s);
            prop_assert!(sym.is_valid());
            prop_assert_eq!(interner.view(sym), s.as_str());
            let again = interner.intern(&s);
            prop_assert_eq!(sym, again);
        }

        #[test]
        fn distinct_strings_distinct_symbols(
            a in "[a-z]{1,16}",
            b in "[A-Z]{1,16}",
        ) {
            let mut interner = SymbolInterner::new();
            let sa = interner.intern(&a);
            let sb = interner.intern(&b);
            prop_assert_ne!(sa, sb);
        }
    }
}
