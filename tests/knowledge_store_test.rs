//! JSON knowledge store feeding the grounding contract

use faqbot_core::{
    knowledge::default_entries, FaqbotError, GroundingContractBuilder, JsonFileStore,
    KnowledgeRepository, NewEntry, Persona, PersonaStore,
};
use tempfile::TempDir;

#[test]
fn test_persona_change_survives_reopen_and_reaches_contract() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("knowledge.json");

    let store = JsonFileStore::open(&path).unwrap();
    store
        .set_persona(Persona {
            name: "Lia".to_string(),
            tone_description: "uma monitora descontraída".to_string(),
        })
        .unwrap();

    let reopened = JsonFileStore::open(&path).unwrap();
    let contract = GroundingContractBuilder::new()
        .build(&reopened.snapshot().unwrap(), &reopened.persona().unwrap());

    assert!(contract
        .system_instruction
        .starts_with("Você é Lia, uma monitora descontraída."));
}

#[test]
fn test_added_entry_lands_last_in_contract() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::open(dir.path().join("knowledge.json")).unwrap();
    store
        .add(NewEntry {
            question: "Tem estacionamento?".to_string(),
            answer: "Sim, no bloco A.".to_string(),
            category: "Campus".to_string(),
        })
        .unwrap();

    let contract = GroundingContractBuilder::new()
        .build(&store.snapshot().unwrap(), &store.persona().unwrap());
    let text = contract.system_instruction;

    let last_seed = default_entries().pop().unwrap();
    let seed_pos = text.find(&format!("P: {}", last_seed.question)).unwrap();
    let new_pos = text.find("P: Tem estacionamento?\nR: Sim, no bloco A.").unwrap();
    assert!(seed_pos < new_pos);
}

#[test]
fn test_blank_fields_rejected_and_nothing_written() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("knowledge.json");
    let store = JsonFileStore::open(&path).unwrap();

    let err = store
        .add(NewEntry {
            question: "Q".to_string(),
            answer: "   ".to_string(),
            category: "C".to_string(),
        })
        .unwrap_err();

    assert!(matches!(err, FaqbotError::Validation(_)));
    assert!(!path.exists());
}

#[test]
fn test_corrupt_file_reports_serialization_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("knowledge.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(matches!(
        JsonFileStore::open(&path),
        Err(FaqbotError::Serialization(_))
    ));
}
