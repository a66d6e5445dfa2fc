use super::*;

/// Tests loading active units with their cities.
///
/// Verifies that inactive units are excluded and that each returned unit carries its own
/// city's coordinates and state abbreviation.
///
/// Expected: Ok(Vec<PartnerUnitWithCity>) with only active units
#[tokio::test]
async fn returns_only_active_units_with_city() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_geo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let sp = factory::state::StateFactory::new(db)
        .abbreviation("SP")
        .build()
        .await?;
    let rj = factory::state::StateFactory::new(db)
        .abbreviation("RJ")
        .build()
        .await?;
    let santos = factory::city::CityFactory::new(db, sp.id)
        .name("Santos")
        .coordinates(-23.96, -46.33)
        .build()
        .await?;
    let niteroi = factory::city::CityFactory::new(db, rj.id)
        .name("Niterói")
        .coordinates(-22.88, -43.10)
        .build()
        .await?;

    let active_santos = factory::create_partner_unit(db, santos.id).await?;
    let active_niteroi = factory::create_partner_unit(db, niteroi.id).await?;
    factory::partner_unit::PartnerUnitFactory::new(db, santos.id)
        .active(false)
        .build()
        .await?;

    let mut units = PartnerUnitRepository::new(db).get_active_with_city().await?;
    units.sort_by_key(|u| u.unit.id);

    assert_eq!(units.len(), 2);
    assert!(units.iter().all(|u| u.unit.active));

    assert_eq!(units[0].unit.id, active_santos.id);
    assert_eq!(units[0].city.id, santos.id);
    assert_eq!(units[0].city.latitude, -23.96);
    assert_eq!(units[0].state_abbreviation, "SP");

    assert_eq!(units[1].unit.id, active_niteroi.id);
    assert_eq!(units[1].city.name, "Niterói");
    assert_eq!(units[1].state_abbreviation, "RJ");

    Ok(())
}

/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_when_no_active_units() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_geo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, city) = factory::create_city_with_state(db).await?;
    factory::partner_unit::PartnerUnitFactory::new(db, city.id)
        .active(false)
        .build()
        .await?;

    let units = PartnerUnitRepository::new(db).get_active_with_city().await?;

    assert!(units.is_empty());

    Ok(())
}

/// Tests that units which cannot be positioned are skipped.
///
/// Foreign keys are disabled to insert a unit without a city and a unit whose city has
/// no state row.
///
/// Expected: Ok(Vec) containing only the unit with a complete city and state
#[tokio::test]
async fn skips_units_without_city_or_state() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_geo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, city) = factory::create_city_with_state(db).await?;
    let placed = factory::create_partner_unit(db, city.id).await?;

    db.execute_unprepared("PRAGMA foreign_keys = OFF").await?;

    let stateless_city = factory::city::CityFactory::new(db, 9_999).build().await?;
    factory::create_partner_unit(db, stateless_city.id).await?;
    factory::create_partner_unit(db, 8_888).await?;

    let units = PartnerUnitRepository::new(db).get_active_with_city().await?;

    assert_eq!(units.len(), 1);
    assert_eq!(units[0].unit.id, placed.id);

    Ok(())
}
