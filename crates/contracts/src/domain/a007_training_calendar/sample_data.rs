use super::aggregate::{DeliveryMode, SessionStatus, TrainingSession, TrainingTopic};
use once_cell::sync::Lazy;

#[allow(clippy::too_many_arguments)]
fn session(
    id: &str,
    title: &str,
    topic: TrainingTopic,
    date: &str,
    duration_hours: f32,
    mode: DeliveryMode,
    trainer: &str,
    audience: &str,
    enrolled: u32,
    capacity: u32,
    mandatory: bool,
    status: SessionStatus,
) -> TrainingSession {
    TrainingSession {
        id: id.to_string(),
        title: title.to_string(),
        topic,
        date: date.to_string(),
        duration_hours,
        mode,
        trainer: trainer.to_string(),
        audience: audience.to_string(),
        enrolled,
        capacity,
        mandatory,
        status,
    }
}

pub static TRAINING_SESSIONS: Lazy<Vec<TrainingSession>> = Lazy::new(|| {
    use DeliveryMode::*;
    use SessionStatus::*;
    use TrainingTopic::*;
    vec![
        session("TRN-2026-101", "AML Red Flags for Relationship Managers", AntiMoneyLaundering, "2026-10-20", 2.0, Classroom, "Priya Raman", "Retail Banking", 34, 40, true, Scheduled),
        session("TRN-2026-102", "Phishing Simulation Debrief", InformationSecurity, "2026-10-22", 1.0, Online, "James O'Connor", "All Staff", 250, 250, true, Full),
        session("TRN-2026-103", "DPDP Act 2023 Essentials", DataPrivacy, "2026-10-24", 1.5, Hybrid, "Bob Smith", "Customer Operations", 58, 80, true, Scheduled),
        session("TRN-2026-104", "Trading Window and UPSI Handling", InsiderTrading, "2026-10-09", 1.0, Online, "Rahul Mehta", "Designated Persons", 112, 150, true, Completed),
        session("TRN-2026-105", "Code of Conduct Annual Refresher", CodeOfConduct, "2026-10-30", 1.0, Online, "Meera Iyer", "All Staff", 410, 1000, true, Scheduled),
        session("TRN-2026-106", "Speak Up: Whistleblowing Channels", Whistleblowing, "2026-10-05", 0.5, Online, "Sofia Martins", "People Managers", 64, 120, false, Completed),
        session("TRN-2026-107", "Secure Coding Workshop", InformationSecurity, "2026-11-04", 4.0, Classroom, "Daniel Wu", "Engineering", 25, 25, false, Full),
        session("TRN-2026-108", "KYC Periodic Review Procedures", AntiMoneyLaundering, "2026-10-14", 2.0, Classroom, "Priya Raman", "Branch Operations", 0, 30, true, Cancelled),
        session("TRN-2026-109", "Privacy by Design for Product Teams", DataPrivacy, "2026-11-12", 2.5, Hybrid, "Alice Johnson", "Product & Design", 19, 35, false, Scheduled),
        session("TRN-2026-110", "Board Briefing: Insider Trading Enforcement Trends", InsiderTrading, "2026-11-18", 1.0, Classroom, "Rahul Mehta", "Board of Directors", 9, 12, true, Scheduled),
        session("TRN-2026-111", "Gifts, Hospitality and Conflicts of Interest", CodeOfConduct, "2026-09-26", 1.0, Online, "Meera Iyer", "Procurement", 41, 60, true, Completed),
        session("TRN-2026-112", "POSH Awareness Session", CodeOfConduct, "2026-10-28", 1.5, Hybrid, "Meera Iyer", "All Staff", 140, 200, true, Scheduled),
    ]
});

pub fn training_sessions() -> &'static [TrainingSession] {
    &TRAINING_SESSIONS
}
