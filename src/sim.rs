use std::collections::HashSet;

use log::{debug, info};
use metrohash::MetroBuildHasher;

use crate::{Cell, Grid, Output, Result};

/// Drives a grid generation after generation and paints it to an output.
#[derive(Debug)]
pub struct Game<O>
where
    O: Output,
{
    grid: Grid,
    output: O,
    generation: u32,
    max_generations: u32,
    infect_after: u32,
}

impl<O> Game<O>
where
    O: Output,
{
    /// `max_generations` and `infect_after` are disabled with `0`.
    pub fn new(grid: Grid, output: O, max_generations: u32, infect_after: u32) -> Self {
        let mut game = Self {
            grid,
            output,
            generation: 1,
            max_generations,
            infect_after,
        };
        game.pad_grid();
        game
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn set_grid(&mut self, grid: Grid) -> &mut Self {
        self.grid = grid;
        self
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn into_output(self) -> O {
        self.output
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn max_generations(&self) -> u32 {
        self.max_generations
    }

    pub fn infect_after(&self) -> u32 {
        self.infect_after
    }

    pub fn has_infected(&self) -> bool {
        self.infect_after != 0 && self.infect_after <= self.generation
    }

    /// true once the generation limit has been passed.
    pub fn is_finished(&self) -> bool {
        self.max_generations != 0 && self.generation > self.max_generations
    }

    /// Paints the working grid, keeping only the cells the output accepted.
    pub fn current(&mut self) -> Result<&mut Self> {
        let mut grid = Grid::new();
        for cell in self.grid.cells() {
            let (x, y) = (i64::from(cell.x()), i64::from(cell.y()));
            if self.output.set(x, y, cell.is_active()) {
                grid.add(*cell);
            }
        }
        self.output.out()?;
        Ok(self.set_grid(grid))
    }

    /// Adds the dead cells that could come alive to the working grid.
    ///
    /// Without infection a birth needs three live neighbors, so a dead cell
    /// touched by a single live one is left out. Under infection one is
    /// enough and every touched cell is kept.
    pub fn pad_grid(&mut self) -> &mut Self {
        let infected = self.has_infected();
        let mut grid = self.grid.clone();
        let mut seen: HashSet<_, MetroBuildHasher> = HashSet::default();

        for cell in self.grid.cells().filter(|cell| cell.is_active()) {
            for neighbor in cell.neighbors(false) {
                let (x, y) = (i64::from(neighbor.x()), i64::from(neighbor.y()));
                if !self.output.is_inside_grid(x, y) || grid.has(neighbor.id()) {
                    continue;
                }
                if infected || !seen.insert(neighbor.id()) {
                    grid.add(neighbor);
                }
            }
        }
        self.set_grid(grid)
    }

    /// Applies the rule to the working grid and pads the result.
    pub fn next(&mut self) -> &mut Self {
        let mut grid = Grid::new();
        for cell in self.grid.cells() {
            if self.should_be_in_next_generation(cell) {
                grid.add(Cell::active(cell.x(), cell.y()));
            }
        }
        self.generation += 1;
        debug!(
            "generation {}: {} alive, infected: {}",
            self.generation,
            grid.active_count(),
            self.has_infected()
        );
        self.set_grid(grid).pad_grid()
    }

    /// Whether `cell` is alive in the following generation.
    ///
    /// Without infection this is the classic rule: survive with 2 or 3 live
    /// Moore neighbors, birth with exactly 3. Under infection a live cell
    /// survives with any live orthogonal neighbor, while a dead one is born
    /// with exactly one live Moore neighbor.
    pub fn should_be_in_next_generation(&self, cell: &Cell) -> bool {
        let count = self.grid.count_active_neighbors(cell, false);
        match (self.has_infected(), cell.is_active()) {
            (true, true) => self.grid.count_active_neighbors(cell, true) > 0,
            (true, false) => count == 1,
            (false, active) => (count == 2 && active) || count == 3,
        }
    }

    /// Plays generation after generation until the population stabilizes
    /// or the generation limit is passed. Returns the rendered generations.
    pub fn play(&mut self) -> Result<u32> {
        info!(
            "playing from generation {} (max: {}, infect after: {})",
            self.generation, self.max_generations, self.infect_after
        );
        let mut rendered = 0;
        loop {
            let before = self.current()?.grid().as_string();
            rendered += 1;
            let after = self.next().grid().as_string();
            let changed = before != after;

            if self.is_finished() {
                info!("stopped after generation {}: limit reached", self.generation - 1);
                break;
            }
            if !self.output.run(changed) {
                info!("stopped at generation {}: population stable", self.generation);
                break;
            }
        }
        Ok(rendered)
    }
}
