use super::*;

/// Expected: Ok(Some(PartnerUnit))
#[tokio::test]
async fn finds_existing_unit() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_geo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, city) = factory::create_city_with_state(db).await?;
    let created = factory::create_partner_unit(db, city.id).await?;

    let unit = PartnerUnitRepository::new(db).find_by_id(created.id).await?;

    let unit = unit.unwrap();
    assert_eq!(unit.id, created.id);
    assert_eq!(unit.name, created.name);

    Ok(())
}

/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_unit() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_geo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let unit = PartnerUnitRepository::new(db).find_by_id(99999).await?;

    assert!(unit.is_none());

    Ok(())
}
