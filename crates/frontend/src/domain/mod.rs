pub mod a001_patient;
pub mod a002_doctor;
pub mod a003_staff;
pub mod a004_inventory;
pub mod a005_laboratory;
pub mod a006_laboratory_work;
pub mod a007_payment_method;
pub mod a008_payment;
pub mod a009_proforma;
pub mod a010_proposal;
pub mod a011_clinical_history;
