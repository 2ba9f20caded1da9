//! Animation system for the motion showcase

mod animation;
mod content;
mod infinite;
mod spring;
mod transition;
mod visibility;

pub use animation::*;
pub use content::{
    AnimatedContent, ContentFrame, ContentItem, ContentTransform, EnterTransition, ExitTransition,
};
pub use infinite::{InfiniteAnimation, InfiniteRepeatableSpec, InfiniteTransition, RepeatMode};
pub use spring::SpringSimulation;
pub use transition::{Transition, TransitionValue};
pub use visibility::AnimatedVisibility;

pub mod prelude {
    pub use crate::animation::{
        Animatable, Animated, AnimationEndReason, AnimationSpec, AnimationType, Easing, Lerp,
        Spring, SpringSpec,
    };
    pub use crate::content::{AnimatedContent, ContentTransform, EnterTransition, ExitTransition};
    pub use crate::infinite::{InfiniteRepeatableSpec, InfiniteTransition, RepeatMode};
    pub use crate::transition::Transition;
    pub use crate::visibility::AnimatedVisibility;
}
