use mtg_frontend::chat::{ChatLog, Role, FAILURE_MESSAGE};
use mtg_frontend::content::{NAV_LINKS, PROCESS, SERVICES};
use mtg_frontend::lead_form::{
    Field, LeadForm, EMAIL_INVALID, NAME_REQUIRED, PHONE_INVALID, PHONE_REQUIRED,
};
use mtg_frontend::motion::badge::OBSERVED_SECTIONS;
use mtg_frontend::services::advice::AdviceError;

#[test]
fn correcting_fields_one_by_one() {
    let mut form = LeadForm::default();
    let mut errors = form.validate();
    assert_eq!(errors.get(Field::FullName), Some(NAME_REQUIRED));
    assert_eq!(errors.get(Field::Phone), Some(PHONE_REQUIRED));

    form.set(Field::FullName, "Anna Nowak".to_string());
    assert!(errors.clear(Field::FullName));
    assert_eq!(errors.get(Field::Email), Some(mtg_frontend::lead_form::EMAIL_REQUIRED));

    form.set(Field::Email, "anna@".to_string());
    form.set(Field::Phone, "12 34".to_string());
    let errors = form.validate();
    assert_eq!(errors.get(Field::FullName), None);
    assert_eq!(errors.get(Field::Email), Some(EMAIL_INVALID));
    assert_eq!(errors.get(Field::Phone), Some(PHONE_INVALID));

    form.set(Field::Email, "anna@mtg.pl".to_string());
    form.set(Field::Phone, "+48 600 700 800".to_string());
    assert!(form.validate().is_empty());
    assert_eq!(form.get(Field::Phone), "+48 600 700 800");
}

#[test]
fn chat_conversation_alternates_roles() {
    let mut log = ChatLog::default();

    let prompt = log.submit("What is a healthy current ratio?");
    assert_eq!(prompt.as_deref(), Some("What is a healthy current ratio?"));
    assert!(log.is_loading());
    log.resolve(Ok(Some("Between 1.5 and 2.".to_string())));

    log.submit("And quick ratio?");
    log.resolve(Err(AdviceError::Transport("offline".to_string())));

    let roles: Vec<Role> = log.messages().iter().map(|m| m.role).collect();
    assert_eq!(roles, vec![Role::User, Role::Model, Role::User, Role::Model]);
    assert_eq!(log.messages()[3].text, FAILURE_MESSAGE);
    assert!(!log.is_loading());
}

#[test]
fn missing_key_reads_as_a_failure() {
    let mut log = ChatLog::default();
    log.submit("Burn rate?");
    log.resolve(Err(AdviceError::MissingApiKey));
    assert_eq!(log.messages()[1].text, FAILURE_MESSAGE);
}

#[test]
fn nav_targets_exist_on_the_page() {
    for link in NAV_LINKS.iter().skip(1) {
        let id = link.href.trim_start_matches('#');
        assert!(OBSERVED_SECTIONS.contains(&id), "{} is not an observed section", id);
    }
    assert_eq!(NAV_LINKS[0].href, "#top");
    assert_eq!(SERVICES.len(), 5);
    assert_eq!(PROCESS.len(), 5);
}
