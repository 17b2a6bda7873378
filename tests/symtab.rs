use tortue::symtab::SymbolTable;

#[test]
fn the_latest_set_always_wins() {
    let mut table = SymbolTable::new();

    assert!(table.set("x", 1.0));
    assert_eq!(table.get("x"), Some(&1.0));

    // Interleave other keys, then overwrite.
    for i in 0..20 {
        table.set(&format!("filler{i}"), f64::from(i));
    }
    assert!(!table.set("x", 2.0));
    assert_eq!(table.get("x"), Some(&2.0));

    // The fillers kept their values across the growth the loop caused.
    for i in 0..20 {
        assert_eq!(table.get(&format!("filler{i}")), Some(&f64::from(i)));
    }

    assert_eq!(table.get("absent"), None);
}

#[test]
fn growth_preserves_every_entry() {
    let mut table = SymbolTable::new();

    for i in 0..100 {
        assert!(table.set(&format!("key{i}"), i));
    }
    assert_eq!(table.len(), 100);

    // Overwrite a few spread-out keys after several doublings.
    for i in (0..100).step_by(7) {
        assert!(!table.set(&format!("key{i}"), i * 1000));
    }

    for i in 0..100 {
        let expected = if i % 7 == 0 { i * 1000 } else { i };
        assert_eq!(table.get(&format!("key{i}")), Some(&expected), "key{i} went missing");
    }
    assert_eq!(table.len(), 100);
}

#[test]
fn capacity_doubles_just_under_three_quarters_load() {
    let mut table = SymbolTable::new();
    assert_eq!(table.capacity(), 8);

    // Five entries fit in eight buckets below the threshold.
    for i in 0..5 {
        table.set(&format!("k{i}"), i);
    }
    assert_eq!(table.capacity(), 8);

    // The sixth would reach 6/8 = 0.75, so the table doubles first.
    table.set("k5", 5);
    assert_eq!(table.capacity(), 16);

    // 100 entries need 256 buckets to stay under 0.75 load.
    for i in 6..100 {
        table.set(&format!("k{i}"), i);
    }
    assert_eq!(table.capacity(), 256);
    assert!(table.capacity().is_power_of_two());
}

#[test]
fn updates_never_grow_the_table() {
    let mut table = SymbolTable::new();

    for i in 0..11 {
        table.set(&format!("k{i}"), 0.0);
    }
    let capacity = table.capacity();

    for _ in 0..1000 {
        assert!(!table.set("k3", 42.0));
    }

    assert_eq!(table.capacity(), capacity);
    assert_eq!(table.len(), 11);
    assert_eq!(table.get("k3"), Some(&42.0));
}

#[test]
fn an_empty_table_answers_no_lookup() {
    let table: SymbolTable<f64> = SymbolTable::new();
    assert!(table.is_empty());
    assert_eq!(table.len(), 0);
    assert_eq!(table.get("anything"), None);
}
