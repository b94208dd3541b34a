//! Creature catalog service.
//!
//! This module provides the `CreatureService` for catalog business logic: creating,
//! reading, updating and deleting creatures, assigning them to trainers, and letting
//! trainers release the creatures they hold. Role decisions are made by the controller;
//! this layer enforces existence and ownership rules. Multi-step writes run inside a
//! single transaction that is rolled back when dropped on error.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        assignment::AssignmentRepository, creature::CreatureRepository, user::UserRepository,
    },
    error::AppError,
    model::{
        assignment::{Assignment, CreateAssignmentParams},
        creature::{CreateCreatureParams, Creature, UpdateCreatureParams},
        user::{Role, User},
    },
    util::validate::{non_blank, normalize_email},
};

/// Sample catalog: (name, type, level, attack, defense, hp, description).
const SAMPLE_CREATURES: [(&str, &str, i32, f64, f64, i32, &str); 30] = [
    ("Pikachu", "Electric", 25, 55.5, 40.0, 100, "Electric mouse"),
    ("Charizard", "Fire/Flying", 36, 84.0, 78.0, 150, "Fire dragon"),
    ("Bulbasaur", "Grass/Poison", 15, 49.0, 49.0, 90, "Seed Pokémon"),
    ("Squirtle", "Water", 18, 48.0, 65.0, 95, "Water turtle"),
    ("Mewtwo", "Psychic", 70, 110.0, 90.0, 200, "Genetic Pokémon"),
    ("Dragonite", "Dragon/Flying", 55, 100.0, 95.0, 180, "Dragon Pokémon"),
    ("Snorlax", "Normal", 45, 85.0, 110.0, 250, "Sleeping Pokémon"),
    ("Gengar", "Ghost/Poison", 40, 95.0, 60.0, 120, "Shadow Pokémon"),
    ("Machamp", "Fighting", 42, 100.0, 80.0, 160, "Superpower Pokémon"),
    ("Gyarados", "Water/Flying", 48, 92.0, 79.0, 170, "Atrocious Pokémon"),
    ("Alakazam", "Psychic", 45, 105.0, 55.0, 130, "Psi Pokémon"),
    ("Arcanine", "Fire", 39, 90.0, 80.0, 155, "Legendary Pokémon"),
    ("Lapras", "Water/Ice", 44, 75.0, 80.0, 190, "Transport Pokémon"),
    ("Jolteon", "Electric", 35, 85.0, 60.0, 120, "Lightning Pokémon"),
    ("Vaporeon", "Water", 35, 80.0, 65.0, 190, "Bubble Jet Pokémon"),
    ("Flareon", "Fire", 35, 95.0, 65.0, 120, "Flame Pokémon"),
    ("Rhydon", "Ground/Rock", 47, 95.0, 95.0, 175, "Drill Pokémon"),
    ("Starmie", "Water/Psychic", 38, 75.0, 70.0, 120, "Mysterious Pokémon"),
    ("Scyther", "Bug/Flying", 40, 90.0, 75.0, 140, "Mantis Pokémon"),
    ("Tauros", "Normal", 43, 85.0, 70.0, 150, "Wild Bull Pokémon"),
    ("Electabuzz", "Electric", 37, 83.0, 57.0, 140, "Electric Pokémon"),
    ("Magmar", "Fire", 38, 95.0, 57.0, 140, "Spitfire Pokémon"),
    ("Pinsir", "Bug", 40, 85.0, 100.0, 150, "Stag Beetle Pokémon"),
    ("Zapdos", "Electric/Flying", 50, 90.0, 85.0, 200, "Legendary Pokémon"),
    ("Moltres", "Fire/Flying", 50, 100.0, 90.0, 200, "Legendary Pokémon"),
    ("Articuno", "Ice/Flying", 50, 85.0, 100.0, 200, "Legendary Pokémon"),
    ("Ditto", "Normal", 20, 48.0, 48.0, 100, "Transform Pokémon"),
    ("Eevee", "Normal", 20, 55.0, 50.0, 110, "Evolution Pokémon"),
    ("Kabutops", "Rock/Water", 40, 105.0, 90.0, 150, "Fossil Pokémon"),
    ("Omastar", "Rock/Water", 40, 90.0, 125.0, 150, "Fossil Pokémon"),
];

/// Result of assigning a creature to a trainer.
#[derive(Debug, Clone)]
pub struct AssignedCreature {
    pub trainer: User,
    pub assignment: Assignment,
}

/// Service providing business logic for the creature catalog.
pub struct CreatureService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CreatureService<'a> {
    /// Creates a new CreatureService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `CreatureService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a creature to the catalog.
    ///
    /// # Arguments
    /// - `params` - Validated creature fields
    ///
    /// # Returns
    /// - `Ok(Creature)` - The stored creature
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateCreatureParams) -> Result<Creature, AppError> {
        let creature = CreatureRepository::new(self.db).create(params).await?;

        Ok(creature)
    }

    /// Adds the sample creatures to the catalog in one transaction.
    ///
    /// Names already in the catalog are skipped, so running it again adds nothing.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of creatures added
    /// - `Err(AppError::DbErr)` - Database error; nothing was added
    pub async fn seed_samples(&self) -> Result<usize, AppError> {
        let txn = self.db.begin().await?;
        let creature_repo = CreatureRepository::new(&txn);

        let mut created = 0;
        for (name, kind, level, attack, defense, hp, description) in SAMPLE_CREATURES {
            if creature_repo.name_exists(name).await? {
                continue;
            }

            creature_repo
                .create(CreateCreatureParams {
                    name: name.to_string(),
                    kind: kind.to_string(),
                    level,
                    attack,
                    defense,
                    hp,
                    description: Some(description.to_string()),
                })
                .await?;
            created += 1;
        }

        txn.commit().await?;

        Ok(created)
    }

    /// Gets the full catalog.
    pub async fn get_all(&self) -> Result<Vec<Creature>, AppError> {
        Ok(CreatureRepository::new(self.db).get_all().await?)
    }

    /// Gets the assignments held by a user.
    pub async fn get_assigned(&self, user_id: i32) -> Result<Vec<Assignment>, AppError> {
        AssignmentRepository::new(self.db).get_by_user(user_id).await
    }

    /// Gets any catalog creature by id.
    ///
    /// # Returns
    /// - `Ok(Creature)` - Creature found
    /// - `Err(AppError::NotFound)` - No creature with that id
    pub async fn get_by_id(&self, id: i32) -> Result<Creature, AppError> {
        CreatureRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(creature_not_found)
    }

    /// Gets a creature through the user's assignment.
    ///
    /// # Arguments
    /// - `user_id` - User requesting the creature
    /// - `creature_id` - Requested creature
    ///
    /// # Returns
    /// - `Ok(Assignment)` - User holds the creature
    /// - `Err(AppError::NotFound)` - Creature does not exist
    /// - `Err(AppError::Forbidden)` - Creature exists but is not assigned to the user
    pub async fn get_assigned_by_id(
        &self,
        user_id: i32,
        creature_id: i32,
    ) -> Result<Assignment, AppError> {
        if CreatureRepository::new(self.db)
            .find_by_id(creature_id)
            .await?
            .is_none()
        {
            return Err(creature_not_found());
        }

        AssignmentRepository::new(self.db)
            .find(user_id, creature_id)
            .await?
            .ok_or_else(|| {
                AppError::Forbidden("You do not have access to this creature".to_string())
            })
    }

    /// Overwrites the provided fields of a creature.
    ///
    /// # Returns
    /// - `Ok(Creature)` - The updated creature
    /// - `Err(AppError::NotFound)` - No creature with that id
    pub async fn update(&self, params: UpdateCreatureParams) -> Result<Creature, AppError> {
        let txn = self.db.begin().await?;

        let creature = CreatureRepository::new(&txn)
            .update(params)
            .await?
            .ok_or_else(creature_not_found)?;

        txn.commit().await?;

        Ok(creature)
    }

    /// Removes a creature from the catalog together with every assignment of it.
    ///
    /// # Returns
    /// - `Ok(())` - Creature deleted
    /// - `Err(AppError::NotFound)` - No creature with that id
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        if !CreatureRepository::new(&txn).delete(id).await? {
            return Err(creature_not_found());
        }

        txn.commit().await?;

        Ok(())
    }

    /// Releases a creature held by the user. The catalog creature is kept.
    ///
    /// # Arguments
    /// - `user_id` - User releasing the creature
    /// - `creature_id` - Creature to release
    ///
    /// # Returns
    /// - `Ok(String)` - Name of the released creature
    /// - `Err(AppError::Forbidden)` - User does not hold the creature
    pub async fn release(&self, user_id: i32, creature_id: i32) -> Result<String, AppError> {
        let txn = self.db.begin().await?;
        let assignment_repo = AssignmentRepository::new(&txn);

        let Some(assignment) = assignment_repo.find(user_id, creature_id).await? else {
            return Err(AppError::Forbidden(
                "You can only release creatures assigned to you".to_string(),
            ));
        };

        assignment_repo.delete(user_id, creature_id).await?;

        txn.commit().await?;

        Ok(assignment.creature.name)
    }

    /// Assigns a catalog creature to a trainer.
    ///
    /// # Arguments
    /// - `creature_id` - Creature to assign
    /// - `trainer_email` - Email of the receiving trainer, required
    /// - `nickname` - Optional nickname; blank values are stored as absent
    ///
    /// # Returns
    /// - `Ok(AssignedCreature)` - The trainer and the new assignment
    /// - `Err(AppError::BadRequest)` - Trainer email missing
    /// - `Err(AppError::NotFound)` - Creature or trainer does not exist
    /// - `Err(AppError::Conflict)` - Trainer already holds the creature
    pub async fn assign(
        &self,
        creature_id: i32,
        trainer_email: Option<String>,
        nickname: Option<String>,
    ) -> Result<AssignedCreature, AppError> {
        let Some(trainer_email) = non_blank(trainer_email).map(|e| normalize_email(&e)) else {
            return Err(AppError::BadRequest(
                "Trainer email is required".to_string(),
            ));
        };

        let txn = self.db.begin().await?;

        if CreatureRepository::new(&txn)
            .find_by_id(creature_id)
            .await?
            .is_none()
        {
            return Err(creature_not_found());
        }

        let Some(trainer) = UserRepository::new(&txn)
            .find_by_email_and_role(&trainer_email, Role::Trainer)
            .await?
        else {
            return Err(AppError::NotFound("Trainer not found".to_string()));
        };

        let assignment_repo = AssignmentRepository::new(&txn);

        if assignment_repo.exists(trainer.id, creature_id).await? {
            return Err(AppError::Conflict(format!(
                "{} already holds this creature",
                trainer.name
            )));
        }

        let assignment = assignment_repo
            .create(CreateAssignmentParams {
                user_id: trainer.id,
                creature_id,
                nickname: non_blank(nickname),
            })
            .await?;

        txn.commit().await?;

        Ok(AssignedCreature {
            trainer,
            assignment,
        })
    }
}

fn creature_not_found() -> AppError {
    AppError::NotFound("Creature not found".to_string())
}
