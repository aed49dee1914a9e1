pub mod aggregate;
pub mod classification;
pub mod meta_object;
pub mod project;
pub mod quantities;

pub use aggregate::{AggregateGroup, GroupKey};
pub use classification::{ClassificationRecord, ClassifiedRow};
pub use meta_object::{MetaObject, Property, PropertySet, PropertyValue};
pub use project::TakeoffModel;
pub use quantities::{ResolvedQuantities, Unit};
