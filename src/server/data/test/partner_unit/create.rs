use super::*;

/// Tests creating a partner unit.
///
/// Verifies that every field is persisted and timestamps are set.
///
/// Expected: Ok(PartnerUnit) with matching data
#[tokio::test]
async fn creates_partner_unit() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_geo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, city) = factory::create_city_with_state(db).await?;

    let unit = PartnerUnitRepository::new(db)
        .create(create_param(city.id, "Unit Paulista"))
        .await?;

    assert!(unit.id > 0);
    assert_eq!(unit.city_id, city.id);
    assert_eq!(unit.name, "Unit Paulista");
    assert_eq!(unit.address, "Av. Paulista, 1000");
    assert_eq!(unit.phone.as_deref(), Some("+55 11 5555-0000"));
    assert_eq!(unit.responsible.as_deref(), Some("Maria"));
    assert_eq!(unit.price, Some(150.0));
    assert!(unit.notes.is_none());
    assert!(unit.active);
    assert_eq!(unit.created_at, unit.updated_at);

    Ok(())
}

/// Expected: Ok(PartnerUnit) with active = false
#[tokio::test]
async fn creates_inactive_partner_unit() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_geo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, city) = factory::create_city_with_state(db).await?;

    let mut param = create_param(city.id, "Closed Unit");
    param.active = false;
    let unit = PartnerUnitRepository::new(db).create(param).await?;

    assert!(!unit.active);

    Ok(())
}
