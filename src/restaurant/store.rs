//! Restaurant store

use crate::error::{BookingError, Result};
use crate::model::Restaurant;
use crate::storage::Collection;

/// Restaurant directory over a `Collection<Restaurant>`
pub struct RestaurantStore<C> {
    collection: C,
}

impl<C: Collection<Restaurant>> RestaurantStore<C> {
    pub fn new(collection: C) -> Self {
        Self { collection }
    }

    /// Append a restaurant (no duplicate check)
    pub fn create(&self, restaurant: Restaurant) -> Result<Restaurant> {
        restaurant.validate()?;

        let mut restaurants = self.collection.load_all()?;
        restaurants.push(restaurant.clone());
        self.collection.save_all(&restaurants)?;

        tracing::info!(name = %restaurant.name, "Restaurant added");
        Ok(restaurant)
    }

    /// All restaurants in storage order
    pub fn list_all(&self) -> Result<Vec<Restaurant>> {
        self.collection.load_all()
    }

    /// Overwrite every field of the first restaurant called `name`
    ///
    /// Returns the record as it was before the update.
    pub fn update(&self, name: &str, replacement: Restaurant) -> Result<Restaurant> {
        replacement.validate()?;

        let mut restaurants = self.collection.load_all()?;
        let index = Self::position_of(&restaurants, name)?;

        let previous = std::mem::replace(&mut restaurants[index], replacement);
        self.collection.save_all(&restaurants)?;

        tracing::info!(name, new_name = %restaurants[index].name, "Restaurant updated");
        Ok(previous)
    }

    /// Remove the first restaurant called `name`
    pub fn delete(&self, name: &str) -> Result<Restaurant> {
        let mut restaurants = self.collection.load_all()?;
        let index = Self::position_of(&restaurants, name)?;

        let removed = restaurants.remove(index);
        self.collection.save_all(&restaurants)?;

        tracing::info!(name, "Restaurant deleted");
        Ok(removed)
    }

    /// Every restaurant called `name`
    pub fn find_by_name(&self, name: &str) -> Result<Vec<Restaurant>> {
        let restaurants = self.collection.load_all()?;
        Ok(restaurants.into_iter().filter(|r| r.name == name).collect())
    }

    fn position_of(restaurants: &[Restaurant], name: &str) -> Result<usize> {
        restaurants
            .iter()
            .position(|r| r.name == name)
            .ok_or_else(|| {
                tracing::warn!(name, "No such restaurant");
                BookingError::NotFound(format!("no restaurant named {}", name))
            })
    }
}
