use candidate_core::{
    CandidateRepository, InMemoryCandidateRepository, NewCandidate, Seniority,
};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use uuid::Uuid;

fn new_candidate(name: &str, seniority: Seniority, years: f64) -> NewCandidate {
    NewCandidate {
        name: name.to_string(),
        surname: "Lovelace".to_string(),
        seniority,
        years,
        availability: true,
    }
}

#[test]
fn save_assigns_distinct_non_nil_ids() {
    let repo = InMemoryCandidateRepository::new();

    let first = repo.save(new_candidate("Ada", Seniority::Senior, 10.0));
    let second = repo.save(new_candidate("Grace", Seniority::Junior, 1.5));

    assert!(!first.id.is_nil());
    assert!(!second.id.is_nil());
    assert_ne!(first.id, second.id);
    assert_eq!(first.name, "Ada");
    assert_eq!(second.seniority, Seniority::Junior);
    assert_eq!(second.years, 1.5);
}

#[test]
fn find_all_returns_records_in_insertion_order() {
    let repo = InMemoryCandidateRepository::new();
    assert!(repo.find_all().is_empty());
    assert!(repo.is_empty());

    let first = repo.save(new_candidate("Ada", Seniority::Senior, 10.0));
    let second = repo.save(new_candidate("Grace", Seniority::Junior, 2.0));
    let third = repo.save(new_candidate("Ada", Seniority::Senior, 10.0));

    let all = repo.find_all();
    assert_eq!(all, vec![first, second, third]);
    assert_eq!(repo.len(), 3);
}

#[test]
fn identical_payloads_are_stored_separately() {
    let repo = InMemoryCandidateRepository::new();

    let first = repo.save(new_candidate("Ada", Seniority::Senior, 10.0));
    let second = repo.save(new_candidate("Ada", Seniority::Senior, 10.0));

    assert_ne!(first.id, second.id);
    assert_eq!(repo.find_all().len(), 2);
}

#[test]
fn find_by_id_round_trips_saved_record() {
    let repo = InMemoryCandidateRepository::new();
    let first = repo.save(new_candidate("Ada", Seniority::Senior, 10.0));
    let second = repo.save(new_candidate("Grace", Seniority::Junior, 0.0));

    assert_eq!(repo.find_by_id(first.id), Some(first));
    assert_eq!(repo.find_by_id(second.id), Some(second));
}

#[test]
fn find_by_id_with_unknown_id_is_none() {
    let repo = InMemoryCandidateRepository::new();
    repo.save(new_candidate("Ada", Seniority::Senior, 10.0));

    assert_eq!(repo.find_by_id(Uuid::new_v4()), None);
    assert_eq!(repo.find_by_id(Uuid::nil()), None);
}

#[test]
fn concurrent_saves_keep_every_record() {
    let repo = Arc::new(InMemoryCandidateRepository::new());
    let workers: Vec<_> = (0..8)
        .map(|worker| {
            let repo = Arc::clone(&repo);
            thread::spawn(move || {
                (0..25u32)
                    .map(|idx| {
                        repo.save(new_candidate(
                            &format!("worker-{worker}-{idx}"),
                            Seniority::Junior,
                            f64::from(idx),
                        ))
                        .id
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for worker in workers {
        for id in worker.join().unwrap() {
            assert!(ids.insert(id), "duplicate id {id}");
        }
    }

    assert_eq!(ids.len(), 200);
    assert_eq!(repo.find_all().len(), 200);
    for id in ids {
        assert!(repo.find_by_id(id).is_some());
    }
}

#[test]
fn repository_is_usable_through_a_reference() {
    fn save_via<R: CandidateRepository>(repo: R) -> Uuid {
        repo.save(new_candidate("Ada", Seniority::Senior, 3.0)).id
    }

    let repo = InMemoryCandidateRepository::new();
    let id = save_via(&repo);

    assert!(repo.find_by_id(id).is_some());
}
