pub mod a001_access_log;
pub mod a002_audit_trail;
pub mod a003_vendor_risk;
pub mod a004_policy_repository;
pub mod a005_soc_shift_log;
pub mod a006_sebi_submission;
pub mod a007_training_calendar;
pub mod a008_risk_register;
pub mod a009_incident_register;
pub mod a010_compliance_obligation;
pub mod a011_control_testing;
pub mod a012_policy_exception;
