//! Common types shared by every entity screen

pub mod clearable;
pub mod delete_guard;
pub mod estado;
pub mod list_page;
pub mod person_ref;
pub mod resource;
pub mod treatment_line;

pub use clearable::{clearable_id, clearable_text, Clearable};
pub use delete_guard::{linked_records_reason, DeleteGuard};
pub use estado::{Estado, EstadoPatch};
pub use list_page::{ListPage, ListQuery};
pub use person_ref::{display_ref, non_empty, NamedRef, PersonRef};
pub use resource::Resource;
pub use treatment_line::{any_discount, lines_total, TreatmentLine};
