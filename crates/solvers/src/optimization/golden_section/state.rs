use std::mem;

use crate::optimization::Evaluation;

use super::{Config, Solution, bracket::GoldenBracket, goal::Goal, solution::Status};

/// Bracket plus the evaluations at its two interior points.
///
/// The better interior point is always the best point evaluated so far,
/// because each shrink keeps it.
pub(super) struct State<I, O> {
    bracket: GoldenBracket,
    left: Evaluation<I, O, 1>,
    right: Evaluation<I, O, 1>,
    goal: Goal,
}

impl<I, O> State<I, O> {
    pub(super) fn new(
        bracket: GoldenBracket,
        left: Evaluation<I, O, 1>,
        right: Evaluation<I, O, 1>,
        goal: Goal,
    ) -> Self {
        Self {
            bracket,
            left,
            right,
            goal,
        }
    }

    pub(super) fn bracket(&self) -> [f64; 2] {
        self.bracket.outer()
    }

    /// Ties favor the left point.
    fn left_is_better(&self) -> bool {
        !self.goal.improves(self.right.objective, self.left.objective)
    }

    /// Where the next interior point goes.
    pub(super) fn next_x(&self) -> f64 {
        if self.left_is_better() {
            self.bracket.next_inner_left()
        } else {
            self.bracket.next_inner_right()
        }
    }

    /// Shrinks toward the better point and installs `eval` at [`next_x`](Self::next_x).
    pub(super) fn accept(&mut self, eval: Evaluation<I, O, 1>) {
        if self.left_is_better() {
            self.bracket.shrink_right();
            self.right = mem::replace(&mut self.left, eval);
        } else {
            self.bracket.shrink_left();
            self.left = mem::replace(&mut self.right, eval);
        }
    }

    pub(super) fn is_converged(&self, config: &Config) -> bool {
        let gap = (self.bracket.inner_right - self.bracket.inner_left).abs();
        let mid = 0.5 * (self.bracket.inner_left + self.bracket.inner_right);
        gap <= config.x_abs_tol() + config.x_rel_tol() * mid.abs()
    }

    pub(super) fn into_solution(self, status: Status, iters: usize) -> Solution<I, O> {
        let best = if self.left_is_better() {
            self.left
        } else {
            self.right
        };
        Solution::from_eval(best, status, iters)
    }
}
