use super::*;

/// Expected: Ok(true) and the unit is gone
#[tokio::test]
async fn deletes_existing_unit() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_geo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, city) = factory::create_city_with_state(db).await?;
    let unit = factory::create_partner_unit(db, city.id).await?;

    let repo = PartnerUnitRepository::new(db);
    let deleted = repo.delete(unit.id).await?;

    assert!(deleted);
    assert!(repo.find_by_id(unit.id).await?.is_none());

    Ok(())
}

/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_nonexistent_unit() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_geo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = PartnerUnitRepository::new(db).delete(99999).await?;

    assert!(!deleted);

    Ok(())
}
