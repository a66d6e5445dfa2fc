use super::*;

/// Expected: Ok(Some(State)) with matching data
#[tokio::test]
async fn finds_existing_state() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_geo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::state::StateFactory::new(db)
        .name("São Paulo")
        .abbreviation("SP")
        .build()
        .await?;

    let state = StateRepository::new(db).find_by_id(created.id).await?;

    let state = state.unwrap();
    assert_eq!(state.id, created.id);
    assert_eq!(state.name, "São Paulo");
    assert_eq!(state.abbreviation, "SP");

    Ok(())
}

/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_state() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_geo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let state = StateRepository::new(db).find_by_id(99999).await?;

    assert!(state.is_none());

    Ok(())
}
