mod common;
mod recommendations;
mod routing;
