use std::sync::Arc;

use chefbuddy_pantry::{FoodCategory, NewFoodItem, PantryRepository};
use chefbuddy_shared::{Error, MemoryStore};
use time::macros::date;

fn repository() -> PantryRepository<Arc<MemoryStore>> {
    PantryRepository::new(Arc::new(MemoryStore::new()))
}

#[tokio::test]
async fn add_assigns_unique_ids_and_keeps_order() -> anyhow::Result<()> {
    let repo = repository();

    let milk = repo
        .add(NewFoodItem::new("Milk", FoodCategory::Dairy, date!(2025 - 06 - 01)))
        .await?;
    let rice = repo
        .add(
            NewFoodItem::new("  Rice ", FoodCategory::Packaged, date!(2025 - 06 - 02))
                .quantity(2)
                .notes("basmati"),
        )
        .await?;

    assert_ne!(milk.id, rice.id);
    assert_eq!(rice.name, "Rice");
    assert_eq!(rice.quantity, 2);
    assert_eq!(rice.notes.as_deref(), Some("basmati"));

    let names: Vec<_> = repo.list().await?.into_iter().map(|i| i.name).collect();
    assert_eq!(names, vec!["Milk", "Rice"]);
    assert_eq!(repo.get(&milk.id).await?, Some(milk));

    Ok(())
}

#[tokio::test]
async fn add_rejects_invalid_input() -> anyhow::Result<()> {
    let repo = repository();

    let blank = repo
        .add(NewFoodItem::new("   ", FoodCategory::Dairy, date!(2025 - 06 - 01)))
        .await;
    assert!(matches!(blank, Err(Error::Validate(_))));

    let zero = repo
        .add(NewFoodItem::new("Eggs", FoodCategory::Dairy, date!(2025 - 06 - 01)).quantity(0))
        .await;
    assert!(matches!(zero, Err(Error::Validate(_))));

    assert!(repo.list().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn delete_removes_and_reports_missing() -> anyhow::Result<()> {
    let repo = repository();
    let item = repo
        .add(NewFoodItem::new("Bread", FoodCategory::Bakery, date!(2025 - 06 - 01)))
        .await?;

    repo.delete(&item.id).await?;
    assert!(repo.list().await?.is_empty());

    let again = repo.delete(&item.id).await;
    assert!(matches!(again, Err(Error::NotFound(_))));

    Ok(())
}
