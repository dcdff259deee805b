// mcbe-preview services
// Services talk to the outside world: the render endpoint, image encoding, the config file.

pub mod image_codec;
pub mod render_client;
pub mod settings_engine;
