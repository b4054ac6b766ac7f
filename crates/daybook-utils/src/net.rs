use listenfd::ListenFd;
use std::io;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tokio::net::TcpListener;

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
pub const DEFAULT_PORT: u16 = 3030;

/// Binds the server socket.
///
/// If neither host nor port is given, a socket handed over through `LISTEN_FDS` (systemd, systemfd) is
/// preferred over binding `DEFAULT_HOST:DEFAULT_PORT`.
pub async fn create_listener(host: Option<IpAddr>, port: Option<u16>) -> io::Result<TcpListener> {
    if host.is_none() && port.is_none() {
        let mut listenfd = ListenFd::from_env();
        if let Some(listener) = listenfd.take_tcp_listener(0)? {
            listener.set_nonblocking(true)?;
            tracing::debug!("using socket from listenfd");
            return TcpListener::from_std(listener);
        }
    }

    let address = SocketAddr::from((host.unwrap_or(DEFAULT_HOST), port.unwrap_or(DEFAULT_PORT)));
    let listener = TcpListener::bind(address).await?;
    tracing::debug!(%address, "bound listener");
    Ok(listener)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test(tokio::test)]
    async fn test_bind_ephemeral_port() {
        let listener = create_listener(Some(DEFAULT_HOST), Some(0)).await.unwrap();
        let address = listener.local_addr().unwrap();
        assert_eq!(address.ip(), DEFAULT_HOST);
        assert_ne!(address.port(), 0);
    }
}
