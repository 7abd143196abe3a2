//! Tuple descriptor
//!
//! A `TupleDesc` is the ordered list of fields that every tuple of a table
//! or operator output follows. Field order defines the tuple's index space
//! and byte offsets:
//!
//! ```text
//! +-----------+-----------+-----+-------------+
//! | field 0   | field 1   | ... | field n-1   |
//! +-----------+-----------+-----+-------------+
//! ^ offset 0  ^ width(0)        ^ sum(width(0..n-1))
//! ```
//!
//! Descriptors are immutable. `merge` builds a new descriptor and leaves
//! both inputs untouched, so a descriptor can be shared read-only (for
//! example behind an `Arc`) by a catalog entry and every tuple of a table.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::slice;

use crate::observability::{self, Event};

use super::errors::{SchemaError, SchemaResult};
use super::types::FieldType;

/// One field of a tuple descriptor
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TdItem {
    field_type: FieldType,
    /// `None` for unnamed fields. Empty names are stored as `None`.
    field_name: Option<String>,
}

impl TdItem {
    fn new(field_type: FieldType, field_name: Option<&str>) -> Self {
        Self {
            field_type,
            field_name: field_name.filter(|n| !n.is_empty()).map(str::to_owned),
        }
    }

    /// Type of the field
    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    /// Name of the field, if any
    pub fn field_name(&self) -> Option<&str> {
        self.field_name.as_deref()
    }

    /// Bytes this field occupies in a serialized tuple
    pub fn byte_width(&self) -> usize {
        self.field_type.byte_width()
    }
}

impl fmt::Display for TdItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.field_type, self.field_name().unwrap_or(""))
    }
}

/// Immutable, ordered description of a tuple's fields
#[derive(Debug, Clone)]
pub struct TupleDesc {
    items: Vec<TdItem>,
    /// Sum of field widths, fixed at construction
    size: usize,
}

impl TupleDesc {
    /// Creates a descriptor with one field per entry of `types`.
    ///
    /// Field `i` takes `names[i]` when present. Missing trailing names,
    /// `None` and `Some("")` all produce an unnamed field.
    ///
    /// # Errors
    ///
    /// `InvalidSchema` if `types` is empty.
    pub fn new<S: AsRef<str>>(types: &[FieldType], names: &[Option<S>]) -> SchemaResult<Self> {
        if types.is_empty() {
            let err = SchemaError::empty_schema();
            if observability::is_enabled() {
                let reason = err.to_string();
                observability::log_event_with_fields(
                    Event::DescriptorRejected,
                    &[("reason", reason.as_str())],
                );
            }
            return Err(err);
        }

        let items = types
            .iter()
            .enumerate()
            .map(|(i, ty)| {
                let name = names.get(i).and_then(Option::as_ref).map(|n| n.as_ref());
                TdItem::new(*ty, name)
            })
            .collect();

        let desc = Self::from_items(items);
        if observability::is_enabled() {
            let num_fields = desc.num_fields().to_string();
            let size = desc.size().to_string();
            observability::log_event_with_fields(
                Event::DescriptorCreated,
                &[("num_fields", num_fields.as_str()), ("size", size.as_str())],
            );
        }
        Ok(desc)
    }

    /// Creates a descriptor whose fields are all unnamed.
    ///
    /// # Errors
    ///
    /// `InvalidSchema` if `types` is empty.
    pub fn new_anonymous(types: &[FieldType]) -> SchemaResult<Self> {
        Self::new::<&str>(types, &[])
    }

    /// Callers guarantee `items` is non-empty.
    fn from_items(items: Vec<TdItem>) -> Self {
        let size = items.iter().map(TdItem::byte_width).sum();
        Self { items, size }
    }

    /// Number of fields, always at least one
    pub fn num_fields(&self) -> usize {
        self.items.len()
    }

    fn item(&self, i: usize) -> SchemaResult<&TdItem> {
        self.items
            .get(i)
            .ok_or_else(|| SchemaError::index_out_of_range(i, self.items.len()))
    }

    /// Type of field `i`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if `i >= num_fields()`.
    pub fn field_type(&self, i: usize) -> SchemaResult<FieldType> {
        self.item(i).map(TdItem::field_type)
    }

    /// Name of field `i`, `None` if the field is unnamed.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if `i >= num_fields()`.
    pub fn field_name(&self, i: usize) -> SchemaResult<Option<&str>> {
        self.item(i).map(TdItem::field_name)
    }

    /// Byte offset of field `i` within a serialized tuple.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if `i >= num_fields()`.
    pub fn field_offset(&self, i: usize) -> SchemaResult<usize> {
        self.item(i)?;
        Ok(self.items[..i].iter().map(TdItem::byte_width).sum())
    }

    /// Index of the first field named `name`.
    ///
    /// Names are compared by content. Unnamed fields never match.
    ///
    /// # Errors
    ///
    /// `FieldNotFound` if no field has that name.
    pub fn field_name_to_index(&self, name: &str) -> SchemaResult<usize> {
        match self.items.iter().position(|item| item.field_name() == Some(name)) {
            Some(i) => Ok(i),
            None => {
                observability::log_event_with_fields(Event::FieldLookupMissed, &[("name", name)]);
                Err(SchemaError::field_not_found(name))
            }
        }
    }

    /// Size in bytes of every tuple that follows this descriptor
    pub fn size(&self) -> usize {
        self.size
    }

    /// Fields in order. Each call starts a fresh traversal.
    pub fn iter(&self) -> slice::Iter<'_, TdItem> {
        self.items.iter()
    }

    /// Field types in order
    pub fn field_types(&self) -> impl Iterator<Item = FieldType> + '_ {
        self.items.iter().map(TdItem::field_type)
    }

    /// Concatenates `td1`'s fields followed by `td2`'s.
    ///
    /// Names are kept as they are; duplicates are neither removed nor
    /// renamed.
    pub fn merge(td1: &TupleDesc, td2: &TupleDesc) -> TupleDesc {
        let mut items = Vec::with_capacity(td1.num_fields() + td2.num_fields());
        items.extend(td1.items.iter().cloned());
        items.extend(td2.items.iter().cloned());

        let merged = Self::from_items(items);
        if observability::is_enabled() {
            let left = td1.num_fields().to_string();
            let right = td2.num_fields().to_string();
            let size = merged.size().to_string();
            observability::log_event_with_fields(
                Event::DescriptorMerged,
                &[
                    ("left_fields", left.as_str()),
                    ("right_fields", right.as_str()),
                    ("size", size.as_str()),
                ],
            );
        }
        merged
    }
}

impl PartialEq for TupleDesc {
    fn eq(&self, other: &Self) -> bool {
        if self.size != other.size || self.items.len() != other.items.len() {
            return false;
        }
        self.items == other.items
    }
}

impl Eq for TupleDesc {}

// Must hash exactly what `eq` compares. `size` is derived from the item
// types, so leaving it out keeps the two consistent.
impl Hash for TupleDesc {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.items.hash(state);
    }
}

impl<'a> IntoIterator for &'a TupleDesc {
    type Item = &'a TdItem;
    type IntoIter = slice::Iter<'a, TdItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for TupleDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", item)?;
        }
        Ok(())
    }
}
