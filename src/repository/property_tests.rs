//! Property-Based Tests for the Repository
//!
//! Drives random operation sequences against the repository and a plain
//! reference model, checking that cached reads never disagree with the store.

use proptest::prelude::*;
use std::collections::HashSet;
use std::time::Duration;

use crate::error::UserError;
use crate::models::{User, UserId};
use crate::repository::UserRepository;

// == Test Configuration ==
const TEST_TTL: Duration = Duration::from_secs(1800);

// == Strategies ==
/// Small name pool so that duplicates happen often
fn name_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["alice", "bob", "carol", "dave", "eve"]).prop_map(String::from)
}

fn address_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{1,32}"
}

fn id_strategy() -> impl Strategy<Value = UserId> {
    1u64..12
}

#[derive(Debug, Clone)]
enum RepoOp {
    Create { name: String, address: String },
    Update { id: UserId, name: String, address: String },
    Delete { id: UserId },
    List,
    Get { id: UserId },
}

fn repo_op_strategy() -> impl Strategy<Value = RepoOp> {
    prop_oneof![
        (name_strategy(), address_strategy())
            .prop_map(|(name, address)| RepoOp::Create { name, address }),
        (id_strategy(), name_strategy(), address_strategy())
            .prop_map(|(id, name, address)| RepoOp::Update { id, name, address }),
        id_strategy().prop_map(|id| RepoOp::Delete { id }),
        Just(RepoOp::List),
        id_strategy().prop_map(|id| RepoOp::Get { id }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Every operation's outcome, and every read, matches a cache-free model.
    #[test]
    fn prop_repository_matches_model(ops in prop::collection::vec(repo_op_strategy(), 1..60)) {
        let repo = UserRepository::with_ttl(TEST_TTL);
        let mut model: Vec<User> = Vec::new();
        let mut next_id: UserId = 1;

        for op in ops {
            match op {
                RepoOp::Create { name, address } => {
                    let result = repo.add(name.clone(), address.clone());
                    if model.iter().any(|u| u.name == name) {
                        prop_assert_eq!(result, Err(UserError::Duplicate(name)));
                    } else {
                        let expected = User::new(next_id, name, address);
                        next_id += 1;
                        prop_assert_eq!(result, Ok(expected.clone()));
                        model.push(expected);
                    }
                }
                RepoOp::Update { id, name, address } => {
                    let result = repo.update(id, name.clone(), address.clone());
                    match model.iter().position(|u| u.id == id) {
                        None => prop_assert_eq!(result, Err(UserError::NotFound(id))),
                        Some(_) if model.iter().any(|u| u.name == name && u.id != id) => {
                            prop_assert_eq!(result, Err(UserError::Duplicate(name)));
                        }
                        Some(index) => {
                            prop_assert!(result.is_ok());
                            model[index] = User::new(id, name, address);
                        }
                    }
                }
                RepoOp::Delete { id } => {
                    let result = repo.delete(id);
                    match model.iter().position(|u| u.id == id) {
                        None => prop_assert_eq!(result, Err(UserError::NotFound(id))),
                        Some(index) => {
                            prop_assert!(result.is_ok());
                            model.remove(index);
                        }
                    }
                }
                RepoOp::List => {
                    prop_assert_eq!(repo.get_all().unwrap(), model.clone());
                }
                RepoOp::Get { id } => {
                    let expected = model
                        .iter()
                        .find(|u| u.id == id)
                        .cloned()
                        .ok_or(UserError::NotFound(id));
                    prop_assert_eq!(repo.get(id), expected);
                }
            }
        }

        prop_assert_eq!(repo.get_all().unwrap(), model);
    }

    // Live names are unique and ids are unique after any sequence of writes.
    #[test]
    fn prop_names_and_ids_unique(ops in prop::collection::vec(repo_op_strategy(), 1..60)) {
        let repo = UserRepository::with_ttl(TEST_TTL);

        for op in ops {
            match op {
                RepoOp::Create { name, address } => { let _ = repo.add(name, address); }
                RepoOp::Update { id, name, address } => { let _ = repo.update(id, name, address); }
                RepoOp::Delete { id } => { let _ = repo.delete(id); }
                RepoOp::List => { let _ = repo.get_all(); }
                RepoOp::Get { id } => { let _ = repo.get(id); }
            }

            let users = repo.get_all().unwrap();
            let names: HashSet<_> = users.iter().map(|u| u.name.as_str()).collect();
            let ids: HashSet<_> = users.iter().map(|u| u.id).collect();
            prop_assert_eq!(names.len(), users.len(), "Duplicate live name");
            prop_assert_eq!(ids.len(), users.len(), "Duplicate id");
        }
    }

    // Creating distinct names yields exactly those users, in creation order.
    #[test]
    fn prop_distinct_creates_listed(names in prop::collection::hash_set("[a-z]{1,12}", 0..20)) {
        let repo = UserRepository::with_ttl(TEST_TTL);
        let names: Vec<String> = names.into_iter().collect();

        for name in &names {
            repo.add(name.clone(), "addr".to_string()).unwrap();
            // Interleave reads so the listing is cached between creates
            repo.get_all().unwrap();
        }

        let listed: Vec<String> = repo.get_all().unwrap().into_iter().map(|u| u.name).collect();
        prop_assert_eq!(listed, names);
    }
}
