use circuit_tracer::{Discipline, Error, Storage};

#[test]
fn stack_retrieves_last_stored() {
    let mut storage = Storage::new(Discipline::Stack);
    for n in 1..=3 {
        storage.store(n);
    }

    assert_eq!(storage.discipline(), Discipline::Stack);
    assert_eq!(storage.len(), 3);
    assert_eq!(storage.retrieve(), Ok(3));
    storage.store(4);
    assert_eq!(storage.retrieve(), Ok(4));
    assert_eq!(storage.retrieve(), Ok(2));
    assert_eq!(storage.retrieve(), Ok(1));
    assert!(storage.is_empty());
}

#[test]
fn queue_retrieves_first_stored() {
    let mut storage = Storage::new(Discipline::Queue);
    for n in 1..=3 {
        storage.store(n);
    }

    assert_eq!(storage.discipline(), Discipline::Queue);
    assert_eq!(storage.retrieve(), Ok(1));
    storage.store(4);
    assert_eq!(storage.retrieve(), Ok(2));
    assert_eq!(storage.retrieve(), Ok(3));
    assert_eq!(storage.retrieve(), Ok(4));
    assert!(storage.is_empty());
}

#[test]
fn retrieve_from_empty_storage_fails() {
    for discipline in [Discipline::Stack, Discipline::Queue] {
        let mut storage = Storage::<usize>::new(discipline);

        assert!(storage.is_empty());
        assert_eq!(storage.retrieve(), Err(Error::EmptyStorage));
    }
}
