use nmprops::NetworkManager;

#[tokio::main]
async fn main() -> nmprops::Result<()> {
    let nm = NetworkManager::new().await?;

    let configs = nm.list_dhcp4_configs().await?;
    if configs.is_empty() {
        println!("No device holds a DHCPv4 lease");
    }

    for (iface, dhcp) in configs {
        println!("{iface} ({})", dhcp.path());
        for (name, value) in dhcp.options().await? {
            println!("  {name:24} {value}");
        }
        println!("  json: {}", dhcp.to_json().await?);
    }

    Ok(())
}
