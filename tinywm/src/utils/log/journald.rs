use tracing::Subscriber;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;

pub fn add_layer<S>(subscriber: S) -> impl Subscriber + for<'span> LookupSpan<'span>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    // Without a journal we still have stderr.
    let layer = tracing_journald::layer()
        .map_err(|err| eprintln!("Couldn't setup journald-logger: {err}"))
        .ok();
    subscriber.with(layer)
}
