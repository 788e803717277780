use nata_track_domain::entities::OnboardingRequest;

use crate::cli::OnboardArgs;
use crate::config::AppConfig;

use super::profile_service;

/// Handle `natatrack onboard`
pub fn onboard(config: &AppConfig, args: OnboardArgs) -> anyhow::Result<()> {
    let service = profile_service(config);

    let request = OnboardingRequest {
        name: args.name,
        due_date: args.due_date,
        current_week: args.current_week,
        first_pregnancy: args.first_pregnancy,
        pre_existing_conditions: args.conditions,
        current_medications: args.medications,
        doctor_name: args.doctor,
        reminder_frequency: args.reminders.into(),
    };

    let profile = service.complete_onboarding(request)?;
    let week = service.display_week()?;

    println!("Profile saved. Welcome, {}!", profile.name);
    println!(
        "Estimated due date: {} (currently week {} of pregnancy)",
        profile.due_date, week
    );
    if let Some(reported) = profile.current_week {
        if reported != week {
            println!(
                "Note: you reported week {}; the week shown by the app is \
                 always computed from your due date.",
                reported
            );
        }
    }

    Ok(())
}
