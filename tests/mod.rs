mod helpers;

#[test]
fn fixtures_are_present_and_readable() {
    let population = helpers::read_fixture("population.csv");
    let customers = helpers::read_fixture("customers.csv");
    let attributes = helpers::read_fixture("attributes.csv");

    assert!(population.starts_with(b"LNR,AGER_TYP"));
    assert!(customers.starts_with(b"LNR,AGER_TYP"));
    assert!(attributes.starts_with(b"Attribute,"));
}
