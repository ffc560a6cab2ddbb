/// Per-tick behaviour. Each simulated type declares the context it needs
/// (what it may read and what it may mutate) instead of sharing one
/// catch-all update signature.
pub trait Tick {
    type Context<'a>;

    fn tick(&mut self, ctx: Self::Context<'_>);
}
