use chrono::{DateTime, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use sosohelper_types::api::{EmployerJobInput, JobListing};
use sosohelper_types::contact::ContactNumber;
use sosohelper_types::models::EmployerJobRecord;

use crate::error::ApiError;
use crate::profile::non_blank;
use crate::state::AppStateInner;

/// Helpers never see more than this many postings at once.
pub const JOB_LIST_LIMIT: usize = 100;

const MAX_CHILDREN: u8 = 10;
const MAX_DESCRIPTION_CHARS: usize = 1200;

/// Validate a job posting and seal the employer's contact.
pub fn post_job(
    state: &AppStateInner,
    employer_id: Uuid,
    input: EmployerJobInput,
    now: DateTime<Utc>,
) -> Result<EmployerJobRecord, ApiError> {
    if input.weekly_off_days.is_empty() {
        return Err(ApiError::InvalidInput("weeklyOffDays must not be empty"));
    }
    if input.tasks.is_empty() {
        return Err(ApiError::InvalidInput("tasks must not be empty"));
    }
    if input.family_composition.children_count > MAX_CHILDREN {
        return Err(ApiError::InvalidInput("childrenCount must be at most 10"));
    }
    let job_description = non_blank(input.job_description);
    if job_description
        .as_ref()
        .is_some_and(|d| d.chars().count() > MAX_DESCRIPTION_CHARS)
    {
        return Err(ApiError::InvalidInput("jobDescription must be at most 1200 characters"));
    }

    let contact = ContactNumber::parse(&input.whatsapp)?;
    let whatsapp = state.cipher.encrypt_string(contact.as_str())?;

    let job = EmployerJobRecord {
        id: Uuid::new_v4(),
        employer_id,
        family_composition: input.family_composition,
        location: input.location,
        house_size: input.house_size,
        separate_room: input.separate_room,
        weekly_off_days: input.weekly_off_days,
        tasks: input.tasks,
        whatsapp,
        job_description,
        created_at: now,
    };

    info!("Employer {} posted job {}", employer_id, job.id);
    Ok(job)
}

/// Newest postings first, capped at [`JOB_LIST_LIMIT`]. A contact that can't
/// be opened is shown as absent; the posting is still listed.
pub fn list_jobs<'a, I>(state: &AppStateInner, jobs: I) -> Vec<JobListing>
where
    I: IntoIterator<Item = &'a EmployerJobRecord>,
{
    let mut jobs: Vec<&EmployerJobRecord> = jobs.into_iter().collect();
    jobs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    jobs.truncate(JOB_LIST_LIMIT);

    debug!("Listing {} jobs", jobs.len());

    jobs.into_iter().map(|job| job_listing(state, job)).collect()
}

/// An employer's own postings, newest first. Contacts are revealed the same
/// best-effort way as in [`list_jobs`].
pub fn list_employer_jobs<'a, I>(
    state: &AppStateInner,
    jobs: I,
    employer_id: Uuid,
) -> Vec<JobListing>
where
    I: IntoIterator<Item = &'a EmployerJobRecord>,
{
    let mut own: Vec<&EmployerJobRecord> = jobs
        .into_iter()
        .filter(|job| job.employer_id == employer_id)
        .collect();
    own.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    debug!("Employer {} has {} jobs", employer_id, own.len());

    own.into_iter().map(|job| job_listing(state, job)).collect()
}

fn job_listing(state: &AppStateInner, job: &EmployerJobRecord) -> JobListing {
    JobListing {
        id: job.id,
        family_composition: job.family_composition.clone(),
        location: job.location,
        house_size: job.house_size,
        separate_room: job.separate_room,
        weekly_off_days: job.weekly_off_days.clone(),
        tasks: job.tasks.clone(),
        whatsapp: state.cipher.reveal(Some(&job.whatsapp)),
        job_description: job.job_description.clone(),
        created_at: job.created_at,
    }
}
