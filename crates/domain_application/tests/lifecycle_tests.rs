//! End-to-end lifecycle scenarios against in-memory adapters: submission
//! pricing, the approval state machine, and conversion to policy.

use std::sync::Arc;

use rust_decimal_macros::dec;

use core_kernel::{FixedClock, PortError};
use domain_application::ports::mock::{
    MockCorporateApplicationStore, MockIndividualApplicationStore,
};
use domain_application::{
    ApplicationError, ApplicationLifecycle, ApplicationStatus, CorporateSubmission,
    IndividualSubmission,
};
use domain_catalog::ports::mock::{MockProgramDirectory, MockRegionDirectory};
use domain_catalog::{Program, Region};
use domain_party::ports::mock::{MockClientStore, MockCorporateClientDirectory};
use domain_party::{ClientRegistry, CorporateClient};
use domain_policy::ports::mock::MockPolicyStore;
use domain_policy::PolicyIssuer;
use test_utils::fixtures::{
    birth_date_for_age, ProgramFixtures, PromoFixtures, RegionFixtures, FIXED_TODAY,
};

struct Harness {
    lifecycle: ApplicationLifecycle,
    programs: Arc<MockProgramDirectory>,
    regions: Arc<MockRegionDirectory>,
    organizations: Arc<MockCorporateClientDirectory>,
    clients: Arc<MockClientStore>,
    policies: Arc<MockPolicyStore>,
}

fn harness() -> Harness {
    let programs = Arc::new(MockProgramDirectory::new());
    let regions = Arc::new(MockRegionDirectory::new());
    let organizations = Arc::new(MockCorporateClientDirectory::new());
    let individual_applications = Arc::new(MockIndividualApplicationStore::new());
    let corporate_applications = Arc::new(MockCorporateApplicationStore::new());
    let clients = Arc::new(MockClientStore::new());
    let policies = Arc::new(MockPolicyStore::new());
    let issuer = Arc::new(PolicyIssuer::new(
        ClientRegistry::new(clients.clone()),
        policies.clone(),
    ));
    let lifecycle = ApplicationLifecycle::new(
        programs.clone(),
        regions.clone(),
        organizations.clone(),
        individual_applications,
        corporate_applications,
        issuer,
    );
    Harness {
        lifecycle,
        programs,
        regions,
        organizations,
        clients,
        policies,
    }
}

fn clock() -> FixedClock {
    FixedClock::ymd(2025, 6, 1)
}

fn individual_submission(program: &Program) -> IndividualSubmission {
    IndividualSubmission {
        program_id: program.id,
        region_id: None,
        applicant_name: "Иванов Иван".to_string(),
        email: Some("ivanov@example.com".to_string()),
        phone: Some("+7 900 000-00-00".to_string()),
        birth_date: Some(birth_date_for_age(25, *FIXED_TODAY)),
        chronic_diseases: false,
        insured_persons: 1,
    }
}

async fn corporate_setup(harness: &Harness, program: Program, region: Region) -> CorporateSubmission {
    let mut organization = CorporateClient::new("ООО Ромашка");
    organization.contact_email = Some("office@romashka.ru".to_string());
    let submission = CorporateSubmission {
        corporate_client_id: organization.id,
        program_id: program.id,
        service_region_id: region.id,
        headcount: 25,
        average_age: Some(34),
        age_band: None,
    };
    harness.programs.insert(program).await;
    harness.regions.insert(region).await;
    harness.organizations.insert(organization).await;
    submission
}

#[tokio::test]
async fn test_individual_submission_is_priced_and_new() {
    let harness = harness();
    let program = ProgramFixtures::standard();
    let submission = individual_submission(&program);
    harness.programs.insert(program).await;

    let application = harness
        .lifecycle
        .submit_individual(submission, &clock())
        .await
        .unwrap();

    assert_eq!(application.status, ApplicationStatus::New);
    assert_eq!(application.calculated_premium, dec!(15000.00));
    assert_eq!(application.base_price_snapshot, dec!(15000.00));
    assert!(application.processed_at.is_none());
}

#[tokio::test]
async fn test_individual_submission_unknown_program_fails() {
    let harness = harness();
    let submission = individual_submission(&ProgramFixtures::standard());

    let result = harness.lifecycle.submit_individual(submission, &clock()).await;

    assert!(matches!(
        result,
        Err(ApplicationError::Port(PortError::NotFound { .. }))
    ));
}

#[tokio::test]
async fn test_corporate_submission_with_volume_discount() {
    let harness = harness();
    let submission =
        corporate_setup(&harness, ProgramFixtures::standard(), RegionFixtures::moscow()).await;

    let application = harness
        .lifecycle
        .submit_corporate(submission, &clock())
        .await
        .unwrap();

    // 15000 x 1.2 x 25 = 450000, less the 15% volume discount.
    assert_eq!(application.calculated_premium, dec!(382500.00));
    assert_eq!(application.status, ApplicationStatus::New);
}

#[tokio::test]
async fn test_corporate_submission_zero_headcount_rejected() {
    let harness = harness();
    let mut submission =
        corporate_setup(&harness, ProgramFixtures::standard(), RegionFixtures::moscow()).await;
    submission.headcount = 0;

    let result = harness.lifecycle.submit_corporate(submission, &clock()).await;

    assert!(matches!(result, Err(ApplicationError::Validation(_))));
}

#[tokio::test]
async fn test_approve_then_reject_then_no_way_back() {
    let harness = harness();
    let program = ProgramFixtures::standard();
    let submission = individual_submission(&program);
    harness.programs.insert(program).await;
    let clock = clock();

    let application = harness
        .lifecycle
        .submit_individual(submission, &clock)
        .await
        .unwrap();

    let approved = harness
        .lifecycle
        .approve_individual(application.id, Some("документы в порядке"), &clock)
        .await
        .unwrap();
    assert_eq!(approved.status, ApplicationStatus::Approved);
    assert_eq!(approved.comment.as_deref(), Some("документы в порядке"));

    let rejected = harness
        .lifecycle
        .reject_individual(application.id, Some("отозвано клиентом"), &clock)
        .await
        .unwrap();
    assert_eq!(rejected.status, ApplicationStatus::Rejected);

    let result = harness
        .lifecycle
        .approve_individual(application.id, None, &clock)
        .await;
    assert!(matches!(result, Err(ApplicationError::InvalidState(_))));
}

#[tokio::test]
async fn test_convert_individual_issues_linked_policy() {
    let harness = harness();
    let program = ProgramFixtures::standard();
    let submission = individual_submission(&program);
    harness.programs.insert(program).await;
    let clock = clock();

    let application = harness
        .lifecycle
        .submit_individual(submission, &clock)
        .await
        .unwrap();

    // Conversion straight from NEW: approval is implied.
    let (converted, policy) = harness
        .lifecycle
        .convert_individual(application.id, &clock)
        .await
        .unwrap();

    assert_eq!(converted.status, ApplicationStatus::ConvertedToPolicy);
    assert!(converted.processed_at.is_some());
    assert!(policy.policy_number.starts_with("DMS-"));
    assert_eq!(policy.premium, dec!(15000.00));
    assert_eq!(policy.application_id, Some(application.id));
    assert_eq!(harness.clients.len().await, 1);
    assert_eq!(harness.policies.len().await, 1);
}

#[tokio::test]
async fn test_convert_with_zero_premium_fails_and_issues_nothing() {
    let harness = harness();
    let program = ProgramFixtures::unpriced();
    let submission = individual_submission(&program);
    harness.programs.insert(program).await;
    let clock = clock();

    let application = harness
        .lifecycle
        .submit_individual(submission, &clock)
        .await
        .unwrap();
    assert_eq!(application.calculated_premium, dec!(0));

    let result = harness
        .lifecycle
        .convert_individual(application.id, &clock)
        .await;

    assert!(matches!(result, Err(ApplicationError::InvalidState(_))));
    assert_eq!(harness.policies.len().await, 0);
    assert_eq!(harness.clients.len().await, 0);
}

#[tokio::test]
async fn test_convert_rejected_application_fails() {
    let harness = harness();
    let program = ProgramFixtures::standard();
    let submission = individual_submission(&program);
    harness.programs.insert(program).await;
    let clock = clock();

    let application = harness
        .lifecycle
        .submit_individual(submission, &clock)
        .await
        .unwrap();
    harness
        .lifecycle
        .reject_individual(application.id, None, &clock)
        .await
        .unwrap();

    let result = harness
        .lifecycle
        .convert_individual(application.id, &clock)
        .await;

    assert!(matches!(result, Err(ApplicationError::InvalidState(_))));
    assert_eq!(harness.policies.len().await, 0);
}

#[tokio::test]
async fn test_double_conversion_fails_with_one_policy() {
    let harness = harness();
    let program = ProgramFixtures::standard();
    let submission = individual_submission(&program);
    harness.programs.insert(program).await;
    let clock = clock();

    let application = harness
        .lifecycle
        .submit_individual(submission, &clock)
        .await
        .unwrap();
    harness
        .lifecycle
        .convert_individual(application.id, &clock)
        .await
        .unwrap();

    let result = harness
        .lifecycle
        .convert_individual(application.id, &clock)
        .await;

    assert!(matches!(result, Err(ApplicationError::InvalidState(_))));
    assert_eq!(harness.policies.len().await, 1);
}

#[tokio::test]
async fn test_convert_corporate_links_policy_and_numbers_sequentially() {
    let harness = harness();
    let submission =
        corporate_setup(&harness, ProgramFixtures::standard(), RegionFixtures::moscow()).await;
    let clock = clock();

    let application = harness
        .lifecycle
        .submit_corporate(submission, &clock)
        .await
        .unwrap();
    let (converted, policy) = harness
        .lifecycle
        .convert_corporate(application.id, &clock)
        .await
        .unwrap();

    assert_eq!(converted.status, ApplicationStatus::ConvertedToPolicy);
    assert_eq!(converted.policy_id, Some(policy.id));
    assert_eq!(policy.policy_number, "DMS-CORP-0001");
    assert_eq!(policy.premium, dec!(382500.00));
}

#[tokio::test]
async fn test_convert_fully_discounted_corporate_floors_premium() {
    let harness = harness();
    let mut program = ProgramFixtures::standard();
    // A fixed discount larger than any total drives the premium to zero.
    program
        .promo_offers
        .push(PromoFixtures::fixed(dec!(10000000)));
    let submission = corporate_setup(&harness, program, RegionFixtures::moscow()).await;
    let clock = clock();

    let application = harness
        .lifecycle
        .submit_corporate(submission, &clock)
        .await
        .unwrap();
    assert_eq!(application.calculated_premium, dec!(0.00));

    let (_, policy) = harness
        .lifecycle
        .convert_corporate(application.id, &clock)
        .await
        .unwrap();

    assert_eq!(policy.premium, dec!(0.01));
}
